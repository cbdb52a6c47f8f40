//! Property tests over sequences of vault operations.

mod common;

use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};
use credvault::errors::ErrorKind;
use credvault::vault::{MemoryBlobStore, Platforms, VaultStore};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["GitHub", "Bank", "Mail", " Mail "]).prop_map(str::to_string)
}

fn password() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Alpha-Pass-1", "Bravo-Pass-2", "Alpha-Pass-1 "])
        .prop_map(str::to_string)
}

proptest! {
    #[test]
    fn no_two_entries_share_label_and_digest(
        attempts in prop::collection::vec((label(), password()), 1..24)
    ) {
        common::setup();
        let mut store = VaultStore::new(MemoryBlobStore::new());
        let mut expected = HashSet::new();

        for (label, password) in &attempts {
            let key = (label.trim().to_string(), password.trim().to_string());
            match store.create(label, password, Platforms::new()) {
                Ok(_) => prop_assert!(expected.insert(key)),
                Err(e) => {
                    prop_assert_eq!(e.kind(), ErrorKind::DuplicateEntry);
                    prop_assert!(expected.contains(&key));
                }
            }
        }

        let entries = store.list().unwrap();
        prop_assert_eq!(entries.len(), expected.len());

        let identities: HashSet<_> = entries
            .iter()
            .map(|e| (e.label.clone(), e.digest.as_str().to_string()))
            .collect();
        prop_assert_eq!(identities.len(), entries.len());
    }

    #[test]
    fn expired_set_grows_with_time(offsets in prop::collection::vec(0i64..200, 1..12), probe in 0i64..400) {
        let mut store = VaultStore::new(MemoryBlobStore::new());
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        for (i, days) in offsets.iter().enumerate() {
            store
                .create_at(&format!("entry-{i}"), "Some-Pass-1", Platforms::new(), t0 + Duration::days(*days))
                .unwrap();
        }

        let earlier = store.list_expired(t0 + Duration::days(probe)).unwrap();
        let later = store.list_expired(t0 + Duration::days(probe + 1)).unwrap();
        prop_assert!(earlier.len() <= later.len());
        for entry in &earlier {
            prop_assert!(later.contains(entry));
        }
    }
}
