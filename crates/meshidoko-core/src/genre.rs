//! Genre classification from provider category tags.

/// Label assigned when no tag matches the classification table.
pub const GENERIC_GENRE: &str = "レストラン";

/// Priority-ordered mapping from provider category tags to display genres.
/// Earlier rows win: a place tagged both `sushi_restaurant` and `bar`
/// classifies as 寿司 no matter the tag order on the record.
const GENRE_TABLE: &[(&str, &str)] = &[
    ("japanese_restaurant", "和食"),
    ("chinese_restaurant", "中華"),
    ("italian_restaurant", "イタリアン"),
    ("french_restaurant", "フレンチ"),
    ("korean_restaurant", "韓国料理"),
    ("indian_restaurant", "インド料理"),
    ("mexican_restaurant", "メキシカン"),
    ("thai_restaurant", "タイ料理"),
    ("pizza_restaurant", "ピザ"),
    ("steak_house", "ステーキ"),
    ("sushi_restaurant", "寿司"),
    ("barbecue_restaurant", "焼肉"),
    ("seafood_restaurant", "シーフード"),
    ("vegetarian_restaurant", "ベジタリアン"),
    ("vegan_restaurant", "ヴィーガン"),
    ("fast_food_restaurant", "ファストフード"),
    ("cafe", "カフェ"),
    ("bar", "バー"),
];

/// Maps a category-tag set to one display genre, first table match wins.
#[must_use]
pub fn classify_genre(tags: &[String]) -> &'static str {
    for (tag, label) in GENRE_TABLE {
        if tags.iter().any(|t| t == tag) {
            return label;
        }
    }
    GENERIC_GENRE
}

/// Expands a requested genre into the keyword phrase used for the nearby
/// search. Genres outside the form's fixed choices pass through unchanged.
#[must_use]
pub fn genre_keyword(genre: &str) -> &str {
    match genre {
        "和食" => "japanese restaurant 和食 日本料理",
        "イタリアン" => "italian restaurant イタリアン パスタ ピザ",
        "フレンチ" => "french restaurant フレンチ ビストロ",
        "中華" => "chinese restaurant 中華料理 中国料理",
        "焼肉" => "yakiniku bbq 焼肉 韓国料理",
        "居酒屋" => "izakaya 居酒屋 日本酒",
        other => other,
    }
}
