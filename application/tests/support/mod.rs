//! In-memory stand-in for the persistence collaborator, implementing the
//! kernel traits over a shared map so the service layer can be exercised
//! without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, CommentQuery, DependOnBookingQuery, DependOnCommentQuery, DependOnItemQuery,
    DependOnItemRequestQuery, DependOnUserQuery, ItemQuery, ItemRequestQuery, SortOrder,
    StateFilter, UserQuery, Viewpoint,
};
use kernel::interface::update::{
    BookingModifier, CommentModifier, DependOnBookingModifier, DependOnCommentModifier,
    DependOnItemModifier, DependOnItemRequestModifier, DependOnUserModifier, ItemModifier,
    ItemRequestModifier, UserModifier,
};
use kernel::prelude::entity::{
    Booking, BookingId, BookingStatus, Comment, Item, ItemId, ItemRequest, ItemRequestId, User,
    UserId,
};
use kernel::KernelError;

#[derive(Default)]
struct State {
    users: HashMap<Uuid, User>,
    items: HashMap<Uuid, Item>,
    // Insertion order doubles as the sort tiebreak.
    bookings: Vec<Booking>,
    comments: Vec<Comment>,
    requests: Vec<ItemRequest>,
}

#[derive(Default, Clone)]
pub struct MockDatabase {
    state: Arc<Mutex<State>>,
}

impl MockDatabase {
    pub fn seed_user(&self, user: User) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(*user.id().as_ref(), user);
    }

    pub fn seed_item(&self, item: Item) {
        let mut state = self.state.lock().unwrap();
        state.items.insert(*item.id().as_ref(), item);
    }

    pub fn seed_booking(&self, booking: Booking) {
        self.state.lock().unwrap().bookings.push(booking);
    }

    pub fn seed_request(&self, request: ItemRequest) {
        self.state.lock().unwrap().requests.push(request);
    }
}

pub struct MockTransaction {
    state: Arc<Mutex<State>>,
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<MockTransaction> for MockDatabase {
    async fn transact(&self) -> error_stack::Result<MockTransaction, KernelError> {
        Ok(MockTransaction {
            state: Arc::clone(&self.state),
        })
    }
}

#[async_trait::async_trait]
impl UserQuery<MockTransaction> for MockDatabase {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.state.lock().unwrap().users.get(id.as_ref()).cloned())
    }
}

impl DependOnUserQuery<MockTransaction> for MockDatabase {
    type UserQuery = MockDatabase;
    fn user_query(&self) -> &Self::UserQuery {
        self
    }
}

#[async_trait::async_trait]
impl UserModifier<MockTransaction> for MockDatabase {
    async fn create(
        &self,
        con: &mut MockTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        con.state
            .lock()
            .unwrap()
            .users
            .insert(*user.id().as_ref(), user.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        con.state
            .lock()
            .unwrap()
            .users
            .insert(*user.id().as_ref(), user.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
    ) -> error_stack::Result<(), KernelError> {
        con.state.lock().unwrap().users.remove(id.as_ref());
        Ok(())
    }
}

impl DependOnUserModifier<MockTransaction> for MockDatabase {
    type UserModifier = MockDatabase;
    fn user_modifier(&self) -> &Self::UserModifier {
        self
    }
}

#[async_trait::async_trait]
impl ItemQuery<MockTransaction> for MockDatabase {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &ItemId,
    ) -> error_stack::Result<Option<Item>, KernelError> {
        Ok(con.state.lock().unwrap().items.get(id.as_ref()).cloned())
    }

    async fn find_by_owner_id(
        &self,
        con: &mut MockTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        Ok(con
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| item.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        con: &mut MockTransaction,
        text: &str,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        let text = text.to_lowercase();
        Ok(con
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| {
                item.available()
                    && (item.name().as_ref().to_lowercase().contains(&text)
                        || item.description().as_ref().to_lowercase().contains(&text))
            })
            .cloned()
            .collect())
    }

    async fn find_by_request_id(
        &self,
        con: &mut MockTransaction,
        request_id: &ItemRequestId,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        Ok(con
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| item.request_id() == Some(request_id))
            .cloned()
            .collect())
    }
}

impl DependOnItemQuery<MockTransaction> for MockDatabase {
    type ItemQuery = MockDatabase;
    fn item_query(&self) -> &Self::ItemQuery {
        self
    }
}

#[async_trait::async_trait]
impl ItemModifier<MockTransaction> for MockDatabase {
    async fn create(
        &self,
        con: &mut MockTransaction,
        item: &Item,
    ) -> error_stack::Result<(), KernelError> {
        con.state
            .lock()
            .unwrap()
            .items
            .insert(*item.id().as_ref(), item.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        item: &Item,
    ) -> error_stack::Result<(), KernelError> {
        con.state
            .lock()
            .unwrap()
            .items
            .insert(*item.id().as_ref(), item.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MockTransaction,
        id: &ItemId,
    ) -> error_stack::Result<(), KernelError> {
        con.state.lock().unwrap().items.remove(id.as_ref());
        Ok(())
    }
}

impl DependOnItemModifier<MockTransaction> for MockDatabase {
    type ItemModifier = MockDatabase;
    fn item_modifier(&self) -> &Self::ItemModifier {
        self
    }
}

#[async_trait::async_trait]
impl BookingQuery<MockTransaction> for MockDatabase {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con
            .state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|booking| booking.id() == id)
            .cloned())
    }

    async fn find_all_by_viewpoint(
        &self,
        con: &mut MockTransaction,
        viewpoint: &Viewpoint,
        filter: StateFilter,
        now: OffsetDateTime,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let state = con.state.lock().unwrap();
        let mut bookings: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|booking| match viewpoint {
                Viewpoint::Booker(user_id) => booking.booker_id() == user_id,
                Viewpoint::Owner(user_id) => state
                    .items
                    .get(booking.item_id().as_ref())
                    .is_some_and(|item| item.owner_id() == user_id),
            })
            .filter(|booking| filter.matches(booking, now))
            .cloned()
            .collect();
        // Stable sort keeps insertion order within equal starts.
        bookings.sort_by_key(|booking| *booking.period().start());
        Ok(bookings)
    }

    async fn find_first_approved_starting_after(
        &self,
        con: &mut MockTransaction,
        item_id: &ItemId,
        after: OffsetDateTime,
        order: SortOrder,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let state = con.state.lock().unwrap();
        let candidates = state.bookings.iter().filter(|booking| {
            booking.item_id() == item_id
                && *booking.status() == BookingStatus::Approved
                && *booking.period().start() > after
        });
        let found = match order {
            SortOrder::Ascending => candidates.min_by_key(|booking| *booking.period().start()),
            SortOrder::Descending => candidates.max_by_key(|booking| *booking.period().start()),
        };
        Ok(found.cloned())
    }

    async fn find_finished_by_booker(
        &self,
        con: &mut MockTransaction,
        booker_id: &UserId,
        item_id: &ItemId,
        before: OffsetDateTime,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con
            .state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|booking| {
                booking.booker_id() == booker_id
                    && booking.item_id() == item_id
                    && *booking.status() == BookingStatus::Approved
                    && *booking.period().end() < before
            })
            .cloned())
    }
}

impl DependOnBookingQuery<MockTransaction> for MockDatabase {
    type BookingQuery = MockDatabase;
    fn booking_query(&self) -> &Self::BookingQuery {
        self
    }
}

#[async_trait::async_trait]
impl BookingModifier<MockTransaction> for MockDatabase {
    async fn create(
        &self,
        con: &mut MockTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        con.state.lock().unwrap().bookings.push(booking.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        con: &mut MockTransaction,
        id: &BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let mut state = con.state.lock().unwrap();
        let Some(stored) = state
            .bookings
            .iter_mut()
            .find(|booking| booking.id() == id && *booking.status() == expected)
        else {
            return Ok(None);
        };
        let updated = Booking::new(
            *stored.id(),
            *stored.item_id(),
            *stored.booker_id(),
            stored.period().clone(),
            status,
            stored.created_at().clone(),
        );
        *stored = updated.clone();
        Ok(Some(updated))
    }
}

impl DependOnBookingModifier<MockTransaction> for MockDatabase {
    type BookingModifier = MockDatabase;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        self
    }
}

#[async_trait::async_trait]
impl ItemRequestQuery<MockTransaction> for MockDatabase {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &ItemRequestId,
    ) -> error_stack::Result<Option<ItemRequest>, KernelError> {
        Ok(con
            .state
            .lock()
            .unwrap()
            .requests
            .iter()
            .find(|request| request.id() == id)
            .cloned())
    }

    async fn find_by_requester_id(
        &self,
        con: &mut MockTransaction,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError> {
        let mut requests: Vec<ItemRequest> = con
            .state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|request| request.requester_id() == requester_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(requests)
    }

    async fn find_all_except_requester(
        &self,
        con: &mut MockTransaction,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError> {
        let mut requests: Vec<ItemRequest> = con
            .state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|request| request.requester_id() != requester_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(requests)
    }
}

impl DependOnItemRequestQuery<MockTransaction> for MockDatabase {
    type ItemRequestQuery = MockDatabase;
    fn item_request_query(&self) -> &Self::ItemRequestQuery {
        self
    }
}

#[async_trait::async_trait]
impl ItemRequestModifier<MockTransaction> for MockDatabase {
    async fn create(
        &self,
        con: &mut MockTransaction,
        request: &ItemRequest,
    ) -> error_stack::Result<(), KernelError> {
        con.state.lock().unwrap().requests.push(request.clone());
        Ok(())
    }
}

impl DependOnItemRequestModifier<MockTransaction> for MockDatabase {
    type ItemRequestModifier = MockDatabase;
    fn item_request_modifier(&self) -> &Self::ItemRequestModifier {
        self
    }
}

#[async_trait::async_trait]
impl CommentQuery<MockTransaction> for MockDatabase {
    async fn find_by_item_id(
        &self,
        con: &mut MockTransaction,
        item_id: &ItemId,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        Ok(con
            .state
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|comment| comment.item_id() == item_id)
            .cloned()
            .collect())
    }
}

impl DependOnCommentQuery<MockTransaction> for MockDatabase {
    type CommentQuery = MockDatabase;
    fn comment_query(&self) -> &Self::CommentQuery {
        self
    }
}

#[async_trait::async_trait]
impl CommentModifier<MockTransaction> for MockDatabase {
    async fn create(
        &self,
        con: &mut MockTransaction,
        comment: &Comment,
    ) -> error_stack::Result<(), KernelError> {
        con.state.lock().unwrap().comments.push(comment.clone());
        Ok(())
    }
}

impl DependOnCommentModifier<MockTransaction> for MockDatabase {
    type CommentModifier = MockDatabase;
    fn comment_modifier(&self) -> &Self::CommentModifier {
        self
    }
}

// Entity builders shared by the test suites.

pub fn user(name: &str) -> User {
    use kernel::prelude::entity::{UserEmail, UserName};
    User::new(
        UserId::new(Uuid::new_v4()),
        UserName::new(name),
        UserEmail::new(format!("{name}@example.com")),
    )
}

pub fn item(owner: &User, available: bool) -> Item {
    use kernel::prelude::entity::{ItemDescription, ItemName};
    Item::new(
        ItemId::new(Uuid::new_v4()),
        *owner.id(),
        ItemName::new("drill"),
        ItemDescription::new("cordless drill"),
        available,
        None,
    )
}

pub fn request(requester: &User, created_at: OffsetDateTime) -> ItemRequest {
    use kernel::prelude::entity::{CreatedAt, RequestDescription};
    ItemRequest::new(
        ItemRequestId::new(Uuid::new_v4()),
        *requester.id(),
        RequestDescription::new("need a drill"),
        CreatedAt::new(created_at),
    )
}

pub fn booking(
    item: &Item,
    booker: &User,
    start: OffsetDateTime,
    end: OffsetDateTime,
    status: BookingStatus,
) -> Booking {
    use kernel::prelude::entity::{BookingPeriod, CreatedAt};
    Booking::new(
        BookingId::new(Uuid::new_v4()),
        *item.id(),
        *booker.id(),
        BookingPeriod::new(start, end).unwrap(),
        status,
        CreatedAt::new(OffsetDateTime::now_utc()),
    )
}
