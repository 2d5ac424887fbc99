//! Human-readable output formatting

use crate::engine::executor::{ExecutionResult, ResultData};

pub fn format_human(result: &ExecutionResult) -> String {
    match &result.data {
        ResultData::Packed(receipt) => {
            let mut output = String::new();
            if let Some(ref raw) = receipt.diagnostic {
                output.push_str(&format!(
                    "I have no idea what {} is - chucking it on the ground.\n",
                    raw
                ));
            }
            output.push_str(&format!(
                "You now have {}'s backpack and put a {} into it.",
                receipt.owner, receipt.payload
            ));
            output
        }
        ResultData::NameTag { owner } => format!("This backpack belongs to {}.", owner),
        ResultData::Contents { items, .. } => {
            if items.is_empty() {
                "The main compartment is empty.".to_string()
            } else {
                format!("The main compartment contains {}.", items.join(", "))
            }
        }
        ResultData::Added { owner, item, .. } => {
            format!("You have placed a {} into {}'s backpack.", item, owner)
        }
        ResultData::Removed { owner, item, .. } => {
            format!("You have removed a {} from {}'s backpack.", item, owner)
        }
        ResultData::NotFound { item, .. } => format!("Your backpack does not contain {}.", item),
        ResultData::Dumped { items, .. } => {
            format!("You have dumped {} on the ground.", list_or_nothing(items))
        }
        ResultData::Backpacks { backpacks } => {
            if backpacks.is_empty() {
                return "No backpacks packed".to_string();
            }
            let mut output = String::from("Backpacks\n---------\n");
            output.push_str(&format!("{:<20} {:>8}\n", "OWNER", "ITEMS"));
            output.push_str(&"-".repeat(29));
            output.push('\n');
            for backpack in backpacks {
                output.push_str(&format!(
                    "{:<20} {:>8}\n",
                    truncate(&backpack.owner, 20),
                    backpack.item_count
                ));
            }
            output
        }
        ResultData::Discarded { owner, items } => format!(
            "You have thrown away {}'s backpack with {} inside.",
            owner,
            list_or_nothing(items)
        ),
        ResultData::Exported { owner, path } => {
            format!("Exported {}'s backpack to {}", owner, path)
        }
        ResultData::Explanation { text } => text.clone(),
    }
}

fn list_or_nothing(items: &[String]) -> String {
    if items.is_empty() {
        "nothing".to_string()
    } else {
        items.join(", ")
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backpack::PackReceipt;
    use crate::engine::BackpackSummary;

    fn human(data: ResultData) -> String {
        format_human(&ExecutionResult::from(data))
    }

    #[test]
    fn test_packed_message() {
        let text = human(ResultData::Packed(PackReceipt {
            owner: "Jim".into(),
            payload: "tent, socks".into(),
            diagnostic: None,
        }));
        assert_eq!(text, "You now have Jim's backpack and put a tent, socks into it.");
    }

    #[test]
    fn test_packed_with_diagnostic() {
        let text = human(ResultData::Packed(PackReceipt {
            owner: "Jim".into(),
            payload: "42".into(),
            diagnostic: Some("42".into()),
        }));
        assert!(text.starts_with("I have no idea what 42 is - chucking it on the ground.\n"));
    }

    #[test]
    fn test_contents_messages() {
        assert_eq!(
            human(ResultData::Contents {
                owner: "Jim".into(),
                items: vec![]
            }),
            "The main compartment is empty."
        );
        assert_eq!(
            human(ResultData::Contents {
                owner: "Jim".into(),
                items: vec!["tent".into(), "jacket".into()]
            }),
            "The main compartment contains tent, jacket."
        );
    }

    #[test]
    fn test_remove_messages() {
        assert_eq!(
            human(ResultData::Removed {
                owner: "Jim".into(),
                item: "tent".into(),
                index: 0
            }),
            "You have removed a tent from Jim's backpack."
        );
        assert_eq!(
            human(ResultData::NotFound {
                owner: "Jim".into(),
                item: "stove".into()
            }),
            "Your backpack does not contain stove."
        );
    }

    #[test]
    fn test_dumped_nothing() {
        assert_eq!(
            human(ResultData::Dumped {
                owner: "Jim".into(),
                items: vec![]
            }),
            "You have dumped nothing on the ground."
        );
    }

    #[test]
    fn test_backpack_table() {
        let text = human(ResultData::Backpacks {
            backpacks: vec![BackpackSummary {
                owner: "Karen".into(),
                item_count: 2,
            }],
        });
        assert!(text.contains("OWNER"));
        assert!(text.contains("Karen"));
        assert_eq!(human(ResultData::Backpacks { backpacks: vec![] }), "No backpacks packed");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }
}
