// ==========================================
// 购入仕样书作成 - 机器种别目录
// ==========================================
// 职责: 机器种别代码 → 名称/英文名/分类 的静态参照数据
// 红线: 只读,进程内不可变,无任何写操作
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// EquipmentTypeEntry - 机器种别条目
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentTypeEntry {
    pub code: &'static str,     // 种别代码（大写,如 WRB）
    pub name: &'static str,     // 日文名称
    pub name_en: &'static str,  // 英文名称
    pub category: &'static str, // 分类（ロボット/治具/専用機 等）
}

// ==========================================
// Shop - 工场区分
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shop {
    Common,
    Welding,
    Painting,
    Assembly,
    Inspection,
}

impl Shop {
    /// 全部工场区分（目录声明顺序）
    pub const ALL: [Shop; 5] = [
        Shop::Common,
        Shop::Welding,
        Shop::Painting,
        Shop::Assembly,
        Shop::Inspection,
    ];

    /// 日文显示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Shop::Common => "共通",
            Shop::Welding => "溶接",
            Shop::Painting => "塗装",
            Shop::Assembly => "組立",
            Shop::Inspection => "検査",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shop::Common => "common",
            Shop::Welding => "welding",
            Shop::Painting => "painting",
            Shop::Assembly => "assembly",
            Shop::Inspection => "inspection",
        }
    }
}

impl fmt::Display for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const fn entry(
    code: &'static str,
    name: &'static str,
    name_en: &'static str,
    category: &'static str,
) -> EquipmentTypeEntry {
    EquipmentTypeEntry {
        code,
        name,
        name_en,
        category,
    }
}

// ===== 共通 =====
const COMMON: &[EquipmentTypeEntry] = &[
    entry("CTL", "制御盤", "Control Panel", "電気"),
    entry("PWR", "分電盤", "Power Panel", "電気"),
    entry("OPR", "操作盤", "Operation Panel", "電気"),
    entry("CNV", "コンベア", "Conveyor", "搬送"),
    entry("MON", "監視システム", "Monitor System", "制御"),
];

// ===== 溶接 =====
const WELDING: &[EquipmentTypeEntry] = &[
    entry("WRB", "溶接ロボット", "Welding Robot", "ロボット"),
    entry("WGN", "溶接ガン", "Welding Gun", "アクセサリ"),
    entry("HRB", "ハンドリングロボット", "Handling Robot", "ロボット"),
    entry("JIG", "溶接治具", "Jig", "治具"),
    entry("SEL", "シーリング装置", "Sealing Device", "専用機"),
    entry("POS", "ポジショナー", "Positioner", "治具"),
];

// ===== 塗装 =====
const PAINTING: &[EquipmentTypeEntry] = &[
    entry("PRB", "塗装ロボット", "Painting Robot", "ロボット"),
    entry("BTH", "塗装ブース", "Booth", "専用機"),
    entry("OVN", "乾燥炉", "Oven", "専用機"),
    entry("PTK", "前処理槽", "Pretreatment Tank", "専用機"),
    entry("EDT", "電着槽", "Electrodeposition Tank", "専用機"),
    entry("SPY", "スプレー装置", "Spray Device", "専用機"),
];

// ===== 組立 =====
const ASSEMBLY: &[EquipmentTypeEntry] = &[
    entry("ARB", "組立ロボット", "Assembly Robot", "ロボット"),
    entry("NUT", "ナットランナー", "Nutrunner", "工具"),
    entry("LFT", "リフター", "Lifter", "搬送"),
    entry("TRN", "ターンテーブル", "Turntable", "搬送"),
];

// ===== 検査 =====
const INSPECTION: &[EquipmentTypeEntry] = &[
    entry("INS", "検査装置", "Inspection Device", "専用機"),
    entry("CAM", "カメラシステム", "Camera System", "センサ"),
    entry("TST", "試験装置", "Test Device", "専用機"),
];

/// 指定工场区分的种别列表
pub fn entries_for_shop(shop: Shop) -> &'static [EquipmentTypeEntry] {
    match shop {
        Shop::Common => COMMON,
        Shop::Welding => WELDING,
        Shop::Painting => PAINTING,
        Shop::Assembly => ASSEMBLY,
        Shop::Inspection => INSPECTION,
    }
}

/// 平坦化后的全部种别（工场区分顺序）
pub fn all_entries() -> impl Iterator<Item = &'static EquipmentTypeEntry> {
    Shop::ALL
        .into_iter()
        .flat_map(|shop| entries_for_shop(shop).iter())
}

/// 按代码查找机器种别
///
/// 输入先 TRIM + UPPER 再做完全一致比较;空输入返回 None（不是错误）。
pub fn lookup(code: &str) -> Option<&'static EquipmentTypeEntry> {
    let normalized = code.trim().to_uppercase();
    if normalized.is_empty() {
        return None;
    }
    all_entries().find(|e| e.code == normalized)
}

/// 代码是否属于目录
pub fn is_known_code(code: &str) -> bool {
    lookup(code).is_some()
}
