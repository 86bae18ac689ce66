use crate::ListConversationsQuery;

use shop_core::{ConversationChannel, ConversationStatus};

#[test]
fn test_empty_query_yields_empty_filter() {
    let filter = ListConversationsQuery::default().into_filter().unwrap();

    assert_eq!(filter.channel, None);
    assert_eq!(filter.status, None);
}

#[test]
fn test_known_values_are_parsed() {
    let query = ListConversationsQuery {
        channel: Some("INSTAGRAM_DM".into()),
        status: Some("CLOSED".into()),
    };

    let filter = query.into_filter().unwrap();

    assert_eq!(filter.channel, Some(ConversationChannel::InstagramDm));
    assert_eq!(filter.status, Some(ConversationStatus::Closed));
}

#[test]
fn test_unknown_values_are_all_reported() {
    let query = ListConversationsQuery {
        channel: Some("pigeon".into()),
        status: Some("archived".into()),
    };

    let errors = query.into_filter().unwrap_err();

    assert!(errors.has_violation("channel"));
    assert!(errors.has_violation("status"));
}
