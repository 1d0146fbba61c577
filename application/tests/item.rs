mod support;

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use application::service::{
    CreateCommentService, CreateItemService, DeleteItemService, GetItemService, UpdateItemService,
};
use application::transfer::{CreateCommentDto, CreateItemDto, UpdateItemDto};
use kernel::prelude::entity::BookingStatus;
use kernel::KernelError;

use support::{booking, item, user, MockDatabase};

#[tokio::test]
async fn create_item_requires_existing_owner() {
    let db = MockDatabase::default();
    let owner = user("owner");
    db.seed_user(owner.clone());

    let created = db
        .create_item(CreateItemDto::new(
            (*owner.id()).into(),
            "ladder",
            "step ladder",
            true,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(created.owner_id, (*owner.id()).into());
    assert!(created.available);
    assert_eq!(created.request_id, None);

    let result = db
        .create_item(CreateItemDto::new(
            Uuid::new_v4(),
            "ladder",
            "step ladder",
            true,
            None,
        ))
        .await;
    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::NotFound
    ));
}

#[tokio::test]
async fn update_item_is_owner_only() {
    let db = MockDatabase::default();
    let owner = user("owner");
    let other = user("other");
    let item = item(&owner, true);
    db.seed_user(owner);
    db.seed_user(other.clone());
    db.seed_item(item.clone());

    let result = db
        .update_item(UpdateItemDto::new(
            (*other.id()).into(),
            (*item.id()).into(),
            Some("hammer".into()),
            None,
            None,
        ))
        .await;
    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::Forbidden
    ));
}

#[tokio::test]
async fn update_item_ignores_blank_fields() {
    let db = MockDatabase::default();
    let owner = user("owner");
    let item = item(&owner, true);
    db.seed_user(owner.clone());
    db.seed_item(item.clone());

    let updated = db
        .update_item(UpdateItemDto::new(
            (*owner.id()).into(),
            (*item.id()).into(),
            Some("  ".into()),
            Some(String::new()),
            Some(false),
        ))
        .await
        .unwrap();
    assert_eq!(updated.name, "drill");
    assert_eq!(updated.description, "cordless drill");
    assert!(!updated.available);

    let renamed = db
        .update_item(UpdateItemDto::new(
            (*owner.id()).into(),
            (*item.id()).into(),
            Some("hammer".into()),
            None,
            Some(true),
        ))
        .await
        .unwrap();
    assert_eq!(renamed.name, "hammer");
    assert!(renamed.available);
}

#[tokio::test]
async fn delete_item_removes_it() {
    let db = MockDatabase::default();
    let owner = user("owner");
    let item = item(&owner, true);
    db.seed_user(owner);
    db.seed_item(item.clone());

    db.delete_item((*item.id()).into()).await.unwrap();

    let result = db.get_item_detail((*item.id()).into()).await;
    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::NotFound
    ));
}

#[tokio::test]
async fn item_detail_reports_adjacent_approved_bookings() {
    let db = MockDatabase::default();
    let owner = user("owner");
    let booker = user("booker");
    let item = item(&owner, true);
    db.seed_user(owner);
    db.seed_user(booker.clone());
    db.seed_item(item.clone());

    let now = OffsetDateTime::now_utc();
    let near = booking(
        &item,
        &booker,
        now + Duration::hours(1),
        now + Duration::hours(2),
        BookingStatus::Approved,
    );
    let far = booking(
        &item,
        &booker,
        now + Duration::hours(5),
        now + Duration::hours(6),
        BookingStatus::Approved,
    );
    // Neither a running booking nor a waiting one counts.
    db.seed_booking(booking(
        &item,
        &booker,
        now - Duration::hours(1),
        now + Duration::minutes(30),
        BookingStatus::Approved,
    ));
    db.seed_booking(booking(
        &item,
        &booker,
        now + Duration::hours(3),
        now + Duration::hours(4),
        BookingStatus::Waiting,
    ));
    db.seed_booking(near.clone());
    db.seed_booking(far.clone());

    let detail = db.get_item_detail((*item.id()).into()).await.unwrap();
    assert_eq!(detail.next_booking, Some(*near.period().start()));
    assert_eq!(detail.last_booking, Some(*far.period().end()));
}

#[tokio::test]
async fn item_detail_without_bookings_has_no_timestamps() {
    let db = MockDatabase::default();
    let owner = user("owner");
    let item = item(&owner, true);
    db.seed_user(owner);
    db.seed_item(item.clone());

    let detail = db.get_item_detail((*item.id()).into()).await.unwrap();
    assert!(detail.comments.is_empty());
    assert_eq!(detail.last_booking, None);
    assert_eq!(detail.next_booking, None);
}

#[tokio::test]
async fn list_items_requires_existing_owner() {
    let db = MockDatabase::default();
    let owner = user("owner");
    db.seed_user(owner.clone());
    db.seed_item(item(&owner, true));
    db.seed_item(item(&owner, false));

    let listed = db.list_items((*owner.id()).into()).await.unwrap();
    assert_eq!(listed.len(), 2);

    let result = db.list_items(Uuid::new_v4()).await;
    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::NotFound
    ));
}

#[tokio::test]
async fn search_skips_store_on_blank_text() {
    let db = MockDatabase::default();
    let found = db.search_items("   ").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn search_matches_name_or_description_of_available_items() {
    let db = MockDatabase::default();
    let owner = user("owner");
    db.seed_user(owner.clone());
    let available = item(&owner, true);
    let hidden = item(&owner, false);
    db.seed_item(available.clone());
    db.seed_item(hidden);

    let by_name = db.search_items("DRILL").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, (*available.id()).into());

    let by_description = db.search_items("cordless").await.unwrap();
    assert_eq!(by_description.len(), 1);

    let none = db.search_items("excavator").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn comments_require_a_finished_approved_booking() {
    let db = MockDatabase::default();
    let owner = user("owner");
    let booker = user("booker");
    let item = item(&owner, true);
    db.seed_user(owner);
    db.seed_user(booker.clone());
    db.seed_item(item.clone());

    // No booking at all.
    let result = db
        .create_comment(CreateCommentDto::new(
            (*booker.id()).into(),
            (*item.id()).into(),
            "works great",
        ))
        .await;
    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::Invalid
    ));

    // A running approved booking is not finished yet.
    let now = OffsetDateTime::now_utc();
    db.seed_booking(booking(
        &item,
        &booker,
        now - Duration::hours(1),
        now + Duration::hours(1),
        BookingStatus::Approved,
    ));
    let result = db
        .create_comment(CreateCommentDto::new(
            (*booker.id()).into(),
            (*item.id()).into(),
            "works great",
        ))
        .await;
    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::Invalid
    ));

    // A finished approved booking unlocks commenting.
    db.seed_booking(booking(
        &item,
        &booker,
        now - Duration::hours(3),
        now - Duration::hours(2),
        BookingStatus::Approved,
    ));
    let comment = db
        .create_comment(CreateCommentDto::new(
            (*booker.id()).into(),
            (*item.id()).into(),
            "works great",
        ))
        .await
        .unwrap();
    assert_eq!(comment.author_name, "booker");
    assert_eq!(comment.text, "works great");

    let detail = db.get_item_detail((*item.id()).into()).await.unwrap();
    assert_eq!(detail.comments, vec![comment]);
}
