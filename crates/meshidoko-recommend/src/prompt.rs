//! Prompt text for recommendation-sentence enrichment.

use meshidoko_core::{RankedRestaurant, SearchCriteria};

pub(crate) const SYSTEM_PROMPT: &str =
    "飲食店の魅力的な推奨理由を簡潔に作成してください。ユーザーの条件に具体的に言及してください。";

/// Builds the user prompt describing one restaurant and the original
/// criteria, asking for a rewrite of roughly 100 characters.
pub(crate) fn enrichment_prompt(restaurant: &RankedRestaurant, criteria: &SearchCriteria) -> String {
    let rating = restaurant
        .rating
        .map_or_else(|| "なし".to_string(), |r| r.to_string());
    let genres = if criteria.genres.is_empty() {
        "指定なし".to_string()
    } else {
        criteria.genres.join(", ")
    };
    let requirements = match criteria.requirements.as_deref() {
        Some(r) if !r.trim().is_empty() => r,
        _ => "なし",
    };

    format!(
        "\n以下の飲食店について、ユーザーの検索条件に基づいて魅力的な推奨理由を100文字以内で作成してください：\n\n\
         店舗情報:\n\
         - 店名: {name}\n\
         - ジャンル: {genre}\n\
         - 住所: {address}\n\
         - 評価: {rating}\n\
         - 特徴: {features}\n\n\
         ユーザーの検索条件:\n\
         - 人数: {party}名\n\
         - 予算: {budget}円/人\n\
         - 目的: {purpose}\n\
         - 希望ジャンル: {genres}\n\
         - その他要望: {requirements}\n\n\
         推奨理由（100文字以内）:",
        name = restaurant.name,
        genre = restaurant.genre,
        address = restaurant.address,
        features = restaurant.features.join(", "),
        party = criteria.party_size,
        budget = criteria.budget,
        purpose = criteria.purpose_label(),
    )
}
