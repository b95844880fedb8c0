//! Forum service behavior over a seeded in-memory store.
//!
//! Each test builds a fresh store, so tests are independent.

use std::sync::Arc;

use agora_core::error::DomainError;
use agora_core::services::ForumService;
use agora_storage::MemoryRepositories;

/// The mocked session user.
const USER_2: Option<&str> = Some("2");

fn service() -> ForumService {
    let repos = Arc::new(MemoryRepositories::seeded().expect("embedded fixtures"));
    ForumService::new(repos)
}

#[tokio::test]
async fn anonymous_actor_is_denied_everywhere() {
    let service = service();

    for err in [
        service.list_forums(None).await.unwrap_err(),
        service.get_forum(None, "2").await.unwrap_err(),
        service.current_user(None).await.unwrap_err(),
        service.create_forum(None, "forumName4").await.unwrap_err(),
        service.post_message(None, "2", "hi").await.unwrap_err(),
    ] {
        assert!(matches!(err, DomainError::Unauthenticated));
        assert!(err.is_denial());
    }
}

#[tokio::test]
async fn forum_access_requires_membership() {
    let service = service();

    // User 2 is not a member of forum 1.
    let err = service.get_forum(USER_2, "1").await.unwrap_err();
    assert!(matches!(err, DomainError::NotMember(_)));

    // But is a member of forums 2 and 3.
    assert_eq!(service.get_forum(USER_2, "2").await.unwrap().name, "forumName2");
    assert_eq!(service.get_forum(USER_2, "3").await.unwrap().name, "forumName3");

    let err = service.get_forum(USER_2, "99").await.unwrap_err();
    assert!(matches!(err, DomainError::ForumNotFound(_)));
}

#[tokio::test]
async fn members_are_listed_in_user_order() {
    let service = service();

    let members = service.members(USER_2, "3").await.unwrap();
    let names: Vec<_> = members.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["userName1", "userName2", "userName3"]);

    let err = service.members(USER_2, "1").await.unwrap_err();
    assert!(matches!(err, DomainError::NotMember(_)));
}

#[tokio::test]
async fn a_user_sees_only_their_joined_forums() {
    let service = service();

    let forums = service.forums_for_user(USER_2, "2").await.unwrap();
    let names: Vec<_> = forums.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["forumName2", "forumName3"]);

    // Other users' memberships are off limits.
    let err = service.forums_for_user(USER_2, "1").await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn messages_come_back_newest_first() {
    let service = service();

    let page = service.messages_page(USER_2, "3", 10, None).await.unwrap();
    assert_eq!(page.total_count, 2);

    let texts: Vec<_> = page.edges.iter().map(|e| e.node.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "message from user1 to forum 3",
            "message from user2 to forum 3",
        ]
    );
    assert_eq!(page.edges[0].cursor, 1);
    assert_eq!(page.edges[1].cursor, 0);
}

#[tokio::test]
async fn message_pagination_walk_is_stable() {
    let service = service();

    let mut after = None;
    let mut texts = Vec::new();
    loop {
        let page = service.messages_page(USER_2, "3", 1, after).await.unwrap();
        assert_eq!(page.total_count, 2);
        if page.edges.is_empty() {
            assert!(!page.page_info.has_next_page);
            break;
        }
        texts.extend(page.edges.iter().map(|e| e.node.text.clone()));
        after = page.page_info.end_cursor;
    }

    assert_eq!(
        texts,
        [
            "message from user1 to forum 3",
            "message from user2 to forum 3",
        ]
    );
}

#[tokio::test]
async fn non_positive_page_size_is_a_hard_error() {
    let service = service();

    let err = service.messages_page(USER_2, "3", 0, None).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));
    assert!(!err.is_denial());
}

#[tokio::test]
async fn create_forum_joins_the_creator() {
    let service = service();

    let forum = service.create_forum(USER_2, "forumName4").await.unwrap();
    assert_eq!(forum.id, "4");
    assert_eq!(forum.member_ids, vec!["2"]);

    let joined = service.forums_for_user(USER_2, "2").await.unwrap();
    assert!(joined.iter().any(|f| f.name == "forumName4"));
}

#[tokio::test]
async fn create_forum_with_taken_name_is_denied() {
    let service = service();

    let err = service.create_forum(USER_2, "forumName1").await.unwrap_err();
    assert!(matches!(err, DomainError::DuplicateForumName(_)));
    assert!(err.is_denial());
}

#[tokio::test]
async fn joining_grants_access() {
    let service = service();

    assert!(service.get_forum(USER_2, "1").await.is_err());

    let forum = service.join_forum_by_id(USER_2, "1").await.unwrap();
    assert_eq!(forum.name, "forumName1");

    assert!(service.get_forum(USER_2, "1").await.is_ok());

    // Joining again changes nothing.
    let again = service.join_forum_by_id(USER_2, "1").await.unwrap();
    assert_eq!(again.member_ids, forum.member_ids);
}

#[tokio::test]
async fn joining_by_name_grants_access() {
    let service = service();

    let forum = service.join_forum_by_name(USER_2, "forumName1").await.unwrap();
    assert_eq!(forum.id, "1");

    let err = service
        .join_forum_by_name(USER_2, "no such forum")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ForumNotFound(_)));
}

#[tokio::test]
async fn posting_appends_to_the_log_without_moving_cursors() {
    let service = service();

    let before = service.messages_page(USER_2, "3", 10, None).await.unwrap();

    let message = service
        .post_message(USER_2, "3", "A whole new message")
        .await
        .unwrap();
    assert_eq!(message.sender_id, "2");

    let page = service.messages_page(USER_2, "3", 10, None).await.unwrap();
    assert_eq!(page.total_count, before.total_count + 1);
    assert_eq!(page.edges[0].node.text, "A whole new message");
    assert_eq!(page.edges[0].cursor, 2);

    // The older messages keep the cursors they already had.
    assert_eq!(page.edges[1].cursor, 1);
    assert_eq!(page.edges[2].cursor, 0);
}

#[tokio::test]
async fn posting_requires_membership() {
    let service = service();

    let err = service.post_message(USER_2, "1", "hi").await.unwrap_err();
    assert!(matches!(err, DomainError::NotMember(_)));

    let err = service.post_message(USER_2, "99", "hi").await.unwrap_err();
    assert!(matches!(err, DomainError::ForumNotFound(_)));

    let err = service.post_message(USER_2, "3", "").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));
}

#[tokio::test]
async fn sender_resolution_finds_fixture_users() {
    let service = service();

    let sender = service.sender("1").await.unwrap();
    assert_eq!(sender.name, "userName1");
    assert_eq!(sender.image, "/path/to/image/user1");

    let err = service.sender("99").await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound(_)));
}
