//! Hand-authored fallback suggestions served when the places provider is
//! unreachable. The caller always gets a non-empty, non-error response.

use meshidoko_core::{RankedRestaurant, SearchCriteria};

/// Floor for the second sample's budget, in yen.
const IZAKAYA_BUDGET_FLOOR: u32 = 3000;

/// Ceiling for the third sample's budget, in yen.
const CASUAL_BUDGET_CEILING: u32 = 4000;

/// Builds the fixed three-entry sample set, interpolating the requester's
/// party size, purpose, and budget into the sentences.
pub(crate) fn fallback_restaurants(criteria: &SearchCriteria) -> Vec<RankedRestaurant> {
    let party = criteria.party_size;
    let purpose = criteria.purpose_label();
    let budget = criteria.budget;

    vec![
        RankedRestaurant {
            name: "牛角 渋谷センター街店".to_string(),
            reason: format!(
                "{party}名での{purpose}に最適。{budget}円の予算内で焼肉が楽しめます。"
            ),
            address: "東京都渋谷区宇田川町25-6".to_string(),
            access: "渋谷駅徒歩3分".to_string(),
            budget,
            features: labels(&["個室あり", "飲み放題プラン", "駅近"]),
            genre: "焼肉".to_string(),
            phone: "03-5428-4129".to_string(),
            place_id: None,
            rating: None,
            website: None,
        },
        RankedRestaurant {
            name: "とりあえず吾平 渋谷店".to_string(),
            reason: format!(
                "居酒屋チェーンで安定した品質。{party}名に対応可能で予算内で利用できます。"
            ),
            address: "東京都渋谷区道玄坂2-29-11".to_string(),
            access: "渋谷駅徒歩5分".to_string(),
            budget: budget.saturating_sub(500).max(IZAKAYA_BUDGET_FLOOR),
            features: labels(&["座敷席あり", "個室対応", "宴会コース"]),
            genre: "居酒屋".to_string(),
            phone: "03-5458-1555".to_string(),
            place_id: None,
            rating: None,
            website: None,
        },
        RankedRestaurant {
            name: "イタリアン・トマト CafeJr. 渋谷店".to_string(),
            reason: format!(
                "カジュアルなイタリアンで{purpose}にぴったり。リーズナブルな価格設定。"
            ),
            address: "東京都渋谷区道玄坂1-12-1".to_string(),
            access: "渋谷駅徒歩2分".to_string(),
            budget: budget.min(CASUAL_BUDGET_CEILING),
            features: labels(&["禁煙席", "WiFi完備", "テラス席"]),
            genre: "イタリアン".to_string(),
            phone: "03-3496-0109".to_string(),
            place_id: None,
            rating: None,
            website: None,
        },
    ]
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
