/// Countries of origin that appear on garment labels, as written on the
/// label itself. The splitter also accepts a `製` suffix and an
/// `原産国` prefix around these tokens.
pub const COUNTRIES: [&str; 13] = [
    "中国",
    "日本",
    "ベトナム",
    "バングラデシュ",
    "カンボジア",
    "インドネシア",
    "ミャンマー",
    "タイ",
    "インド",
    "韓国",
    "台湾",
    "フィリピン",
    "マレーシア",
];
