use crate::texts::{MENU_PROMPT, MORE_PAYLOAD, MORE_TITLE};
use ratebot_core::{QuickReplyOption, RateEntry, RateFeedSnapshot, Reply, pagination};

/// Quick-reply menu for one page: a control per currency, then "more".
#[must_use]
pub fn menu(snapshot: &RateFeedSnapshot, page: usize) -> Reply {
    let options = pagination::slice(snapshot, page)
        .iter()
        .map(|entry| QuickReplyOption {
            title: entry.currency_name.clone(),
            payload: entry.currency_code.clone(),
        })
        .chain(std::iter::once(QuickReplyOption {
            title: MORE_TITLE.to_string(),
            payload: MORE_PAYLOAD.to_string(),
        }))
        .collect();

    Reply::QuickReplies {
        text: MENU_PROMPT.to_string(),
        options,
    }
}

#[must_use]
pub fn rate_details(entry: &RateEntry) -> String {
    format!(
        "{}-VND\nGiá mua: {}đ\nGiá bán: {}đ\nGiá chuyển khoản: {}đ",
        entry.currency_code, entry.buy, entry.sell, entry.transfer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_details_lists_buy_sell_transfer() {
        let entry = RateEntry {
            currency_code: "USD".to_string(),
            currency_name: "US DOLLAR".to_string(),
            buy: "26,085.00".to_string(),
            transfer: "26,115.00".to_string(),
            sell: "26,385.00".to_string(),
        };
        assert_eq!(
            rate_details(&entry),
            "USD-VND\nGiá mua: 26,085.00đ\nGiá bán: 26,385.00đ\nGiá chuyển khoản: 26,115.00đ"
        );
    }

    #[test]
    fn menu_of_empty_snapshot_only_offers_more() {
        let snapshot = RateFeedSnapshot::new(String::new(), Vec::new(), String::new());
        let Reply::QuickReplies { options, .. } = menu(&snapshot, 1) else {
            panic!("expected quick replies");
        };
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].payload, MORE_PAYLOAD);
    }
}
