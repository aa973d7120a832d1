use sunpo_core::TermDictionary;

/// Built-in garment measurement and material terms.
///
/// The matcher always prefers the longest key at a position, so ordering here
/// is cosmetic; compounds are still listed before their parts. The unit
/// identity entries keep a bare `cm`/`mm`/`m` (one not attached to a number)
/// stable through a pass.
pub const BASE_TERMS: &[(&str, &str)] = &[
    // measurements
    ("総丈", "Total Length"),
    ("股下", "Inseam"),
    ("身幅", "Body Width"),
    ("裄丈", "Sleeve Length"),
    ("フード丈", "Hood Length"),
    ("フード幅", "Hood Width"),
    ("肩幅", "Shoulder Width"),
    ("胸囲", "Chest"),
    ("ウエスト", "Waist"),
    ("ヒップ", "Hip"),
    ("袖丈", "Sleeve Length"),
    ("袖口", "Cuff"),
    ("裾幅", "Hem Width"),
    ("股上", "Rise"),
    ("太もも", "Thigh"),
    ("膝下", "Knee"),
    ("足首", "Ankle"),
    ("丈", "Length"),
    ("幅", "Width"),
    ("cm", "cm"),
    ("mm", "mm"),
    ("m", "m"),
    // materials
    ("コットン", "Cotton"),
    ("綿", "Cotton"),
    ("ポリエステル", "Polyester"),
    ("ナイロン", "Nylon"),
    ("ウール", "Wool"),
    ("シルク", "Silk"),
    ("レーヨン", "Rayon"),
    ("アクリル", "Acrylic"),
    ("スパンデックス", "Spandex"),
    ("エラスタン", "Elastane"),
    ("リネン", "Linen"),
    ("カシミア", "Cashmere"),
    ("モヘア", "Mohair"),
    ("アルパカ", "Alpaca"),
    ("混紡", "Blend"),
    ("表生地", "Main Fabric"),
    ("裏生地", "Lining Fabric"),
    ("刺繍糸", "Embroidery Thread"),
    ("再生繊維", "Regenerated Fiber"),
    ("セルロース", "Cellulose"),
    ("ポリウレタン", "Polyurethane"),
];

pub fn base_dictionary() -> TermDictionary {
    TermDictionary::from_pairs(BASE_TERMS.iter().copied())
}
