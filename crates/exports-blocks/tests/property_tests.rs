use exports_blocks::{append_block, has_block, parse_managed, remove_block};
use proptest::prelude::*;

fn unmanaged_content() -> impl Strategy<Value = String> {
    prop::collection::vec("/[a-z]{1,8} [0-9.]{1,15}( -[a-z]{1,8})?", 0..6)
        .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn add_then_remove_restores_trimmed_content(
        base in unmanaged_content(),
        id in "[a-z][a-z0-9-]{0,12}",
        payload in "/[a-z]{1,8} [0-9.]{1,15}",
    ) {
        let added = append_block(base.as_bytes(), &id, &payload).unwrap();
        prop_assert!(has_block(&added, &id));
        let managed = parse_managed(&added);
        prop_assert_eq!(managed.get(&id), Some(payload.as_str()));

        let removed = remove_block(&added, &id).unwrap();
        let expected = format!("{}\n", base.trim());
        prop_assert_eq!(String::from_utf8(removed).unwrap(), expected);
    }

    #[test]
    fn append_is_idempotent(
        base in unmanaged_content(),
        id in "[a-z][a-z0-9-]{0,12}",
        payload in "/[a-z]{1,8}",
    ) {
        let added = append_block(base.as_bytes(), &id, &payload).unwrap();
        prop_assert!(append_block(&added, &id, &payload).is_none());
    }
}
