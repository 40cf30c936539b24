use fake::faker::address::en::CityName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::{Fake, Faker};
use integration_tests::{listing, member, need, sequential_store};
use pretty_assertions::assert_eq;
use sn_core::{
    Availability, Category, Community, Condition, ItemPatch, NewItem, RequestPatch, SessionStore,
};
use uuid::Uuid;

fn random_listing(donor_id: Uuid) -> NewItem {
    NewItem {
        title: Word().fake(),
        description: Sentence(3..8).fake(),
        category: Category::ALL[(0..Category::ALL.len()).fake::<usize>()],
        condition: Condition::ALL[(0..Condition::ALL.len()).fake::<usize>()],
        availability: Availability::ALL[(0..Availability::ALL.len()).fake::<usize>()],
        photo: format!("{}.jpg", Word().fake::<String>()),
        location: CityName().fake(),
        donor_id,
        donor_name: Word().fake(),
        is_available: Faker.fake(),
    }
}

#[test]
fn add_item_puts_payload_first_with_fresh_id() {
    let donor = member(1001, "Ines");
    let mut store = SessionStore::new();
    let mut seen = Vec::new();

    for n in 0..25 {
        let payload = random_listing(donor.id);
        let item = store.add_item(payload.clone()).clone();

        assert_eq!(store.items().len(), n + 1);
        assert_eq!(store.items()[0], item);
        assert_eq!(item.title, payload.title);
        assert_eq!(item.description, payload.description);
        assert_eq!(item.category, payload.category);
        assert_eq!(item.condition, payload.condition);
        assert_eq!(item.availability, payload.availability);
        assert_eq!(item.photo, payload.photo);
        assert_eq!(item.location, payload.location);
        assert_eq!(item.donor_id, payload.donor_id);
        assert_eq!(item.is_available, payload.is_available);
        assert!(!seen.contains(&item.id));
        seen.push(item.id);
    }
}

#[test]
fn add_request_puts_payload_first() {
    let requester = member(1002, "Theo");
    let mut store = sequential_store();
    store.add_request(need("Ladder", &requester));
    let before = store.requests().len();

    let request = store.add_request(need("Wheelbarrow", &requester)).clone();

    assert_eq!(store.requests().len(), before + 1);
    assert_eq!(store.requests()[0], request);
    assert_eq!(request.title, "Wheelbarrow");
    assert_eq!(request.requester_id, requester.id);
    assert!(request.is_active);
}

#[test]
fn availability_patch_changes_only_that_field() {
    let donor = member(1001, "Ines");
    let mut store = sequential_store();
    store.add_item(listing("Kettle", &donor));
    let target = store.add_item(listing("Toaster", &donor)).clone();
    let untouched = store.items()[1].clone();

    assert!(store.update_item(target.id, ItemPatch::available(false)));

    let updated = store.item(target.id).unwrap();
    assert_eq!(updated, &sn_core::Item { is_available: false, ..target });
    assert_eq!(store.items()[1], untouched);
}

#[test]
fn update_with_unknown_id_leaves_collections_unchanged() {
    let donor = member(1001, "Ines");
    let mut store = sequential_store();
    store.add_item(listing("Kettle", &donor));
    store.add_request(need("Iron", &donor));
    let items = store.items().to_vec();
    let requests = store.requests().to_vec();

    assert!(!store.update_item(Uuid::from_u128(u128::MAX), ItemPatch::available(false)));
    assert!(!store.update_request(Uuid::from_u128(u128::MAX), RequestPatch::active(false)));
    assert!(!store.delete_item(Uuid::from_u128(u128::MAX)));
    assert!(!store.delete_request(Uuid::from_u128(u128::MAX)));

    assert_eq!(store.items(), items.as_slice());
    assert_eq!(store.requests(), requests.as_slice());
}

#[test]
fn delete_removes_one_and_keeps_relative_order() {
    let donor = member(1001, "Ines");
    let mut store = sequential_store();
    let ids: Vec<Uuid> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|title| store.add_item(listing(title, &donor)).id)
        .collect();

    assert!(store.delete_item(ids[2]));

    let remaining: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(remaining, vec!["E", "D", "B", "A"]);
}

#[test]
fn logout_then_login_starts_clean() {
    let first = member(1001, "Ines");
    let second = member(1002, "Theo");
    let mut store = sequential_store();
    store.login(first.clone());
    store.add_item(listing("Kettle", &first));
    store.add_request(need("Iron", &first));

    store.logout();
    store.login(second.clone());

    assert!(store.items().is_empty());
    assert!(store.requests().is_empty());
    assert_eq!(store.current_user(), Some(&second));
}

#[test]
fn communities_survive_a_full_session() {
    let seed = Community::seed();
    let donor = member(1001, "Ines");
    let mut store = sequential_store();

    for _ in 0..3 {
        store.login(donor.clone());
        let id = store.add_item(listing("Kettle", &donor)).id;
        store.update_item(id, ItemPatch::available(false));
        let request = store.add_request(need("Iron", &donor)).id;
        store.update_request(request, RequestPatch::active(false));
        store.delete_item(id);
        store.logout();
        assert_eq!(store.communities(), seed.as_slice());
    }
}

#[test]
fn bike_scenario() {
    let mut store = SessionStore::new();
    let u1 = member(1, "u1");

    store.add_item(NewItem {
        is_available: true,
        ..listing("Bike", &u1)
    });
    assert_eq!(store.items()[0].title, "Bike");
    assert!(store.items()[0].is_available);

    let id = store.items()[0].id;
    store.update_item(id, ItemPatch::available(false));
    assert!(!store.items()[0].is_available);

    store.delete_item(id);
    assert_eq!(store.items().len(), 0);
}
