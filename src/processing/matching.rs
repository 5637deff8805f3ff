use crate::domain::item::MatchResult;
use crate::matching::find_matches;
use crate::processing::{MatchError, MatchMessage};
use crate::repository::{FoundItemReader, LostItemReader};

/// Resolve the query for `msg`, load the open found items and rank them.
///
/// The repository is only read; persisting the lost report is the caller's
/// job and happens before the request is sent.
pub fn process_match_message<R>(msg: MatchMessage, repo: &R) -> Result<Vec<MatchResult>, MatchError>
where
    R: FoundItemReader + LostItemReader,
{
    log::info!("Received match request: {msg:?}");

    let query = match msg {
        MatchMessage::LostItem(item_id) => match repo.get_lost_item(item_id) {
            Ok(item) => item.description,
            Err(error) => {
                log::error!("Failed to load lost item {item_id}: {error}");
                return Err(error.into());
            }
        },
        MatchMessage::Description(text) => text,
    };

    let found_items = match repo.list_open_found_items() {
        Ok(items) => items,
        Err(error) => {
            log::error!("Failed to list open found items: {error}");
            return Err(error.into());
        }
    };

    let matches = find_matches(&query, &found_items);

    log::info!(
        "Finished match request: candidates_loaded={}, matched={}",
        found_items.len(),
        matches.len()
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::process_match_message;
    use crate::domain::item::{FoundItem, LostItem};
    use crate::processing::{MatchError, MatchMessage};
    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::repository::{FoundItemReader, LostItemReader};

    #[derive(Default)]
    struct FakeItemRepo {
        found: Vec<FoundItem>,
        lost: Vec<LostItem>,
        fail_listing: bool,
        events: Mutex<Vec<String>>,
    }

    impl FakeItemRepo {
        fn events(&self) -> Vec<String> {
            self.events.lock().expect("events mutex poisoned").clone()
        }
    }

    impl FoundItemReader for FakeItemRepo {
        fn list_open_found_items(&self) -> RepositoryResult<Vec<FoundItem>> {
            self.events
                .lock()
                .expect("events mutex poisoned")
                .push("list_open_found_items".to_string());
            if self.fail_listing {
                return Err(RepositoryError::NotFound);
            }
            Ok(self.found.clone())
        }
    }

    impl LostItemReader for FakeItemRepo {
        fn get_lost_item(&self, item_id: i32) -> RepositoryResult<LostItem> {
            self.events
                .lock()
                .expect("events mutex poisoned")
                .push(format!("get_lost_item({item_id})"));
            self.lost
                .iter()
                .find(|item| item.id == item_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    fn repo() -> FakeItemRepo {
        FakeItemRepo {
            found: vec![
                FoundItem::new(10, "Umbrella", "red umbrella"),
                FoundItem::new(11, "Wallet", "black leather wallet library"),
            ],
            lost: vec![LostItem {
                id: 5,
                title: "My wallet".to_string(),
                description: "black wallet lost at the library".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn lost_item_request_uses_stored_description() {
        let repo = repo();

        let matches = process_match_message(MatchMessage::LostItem(5), &repo).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].item_id, 11);
        assert_eq!(
            repo.events(),
            vec!["get_lost_item(5)".to_string(), "list_open_found_items".to_string()]
        );
    }

    #[test]
    fn description_request_skips_lost_item_lookup() {
        let repo = repo();

        let matches =
            process_match_message(MatchMessage::Description("red umbrella".into()), &repo)
                .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].item_id, 10);
        assert_eq!(matches[0].similarity, 100.0);
        assert_eq!(repo.events(), vec!["list_open_found_items".to_string()]);
    }

    #[test]
    fn unknown_lost_item_is_reported() {
        let repo = repo();

        let result = process_match_message(MatchMessage::LostItem(99), &repo);

        assert!(matches!(
            result,
            Err(MatchError::Repository(RepositoryError::NotFound))
        ));
        assert_eq!(repo.events(), vec!["get_lost_item(99)".to_string()]);
    }

    #[test]
    fn listing_failure_is_propagated() {
        let repo = FakeItemRepo {
            fail_listing: true,
            ..repo()
        };

        let result = process_match_message(MatchMessage::Description("wallet".into()), &repo);

        assert!(matches!(result, Err(MatchError::Repository(_))));
    }

    #[test]
    fn empty_pool_yields_no_matches() {
        let repo = FakeItemRepo::default();

        let matches =
            process_match_message(MatchMessage::Description("anything".into()), &repo).unwrap();

        assert!(matches.is_empty());
    }
}
