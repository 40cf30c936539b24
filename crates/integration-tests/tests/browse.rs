use integration_tests::{listing, member, need, sequential_store};
use pretty_assertions::assert_eq;
use sn_core::{Category, Condition, ItemFilter, NewItem};

fn titles<'a>(items: impl IntoIterator<Item = &'a sn_core::Item>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn browse_combines_search_category_and_condition() {
    let donor = member(1001, "Ines");
    let mut store = sequential_store();
    store.add_item(NewItem {
        category: Category::Books,
        condition: Condition::New,
        ..listing("Cookbook", &donor)
    });
    store.add_item(NewItem {
        category: Category::Electronics,
        condition: Condition::Used,
        description: "Works with any cookbook stand".to_string(),
        ..listing("Tablet", &donor)
    });
    store.add_item(NewItem {
        category: Category::Books,
        condition: Condition::Used,
        ..listing("Atlas", &donor)
    });

    assert_eq!(
        titles(store.browse_items(&ItemFilter::search("COOKBOOK"))),
        vec!["Tablet", "Cookbook"]
    );
    assert_eq!(
        titles(store.browse_items(&ItemFilter::default().with_category(Category::Books))),
        vec!["Atlas", "Cookbook"]
    );
    assert_eq!(
        titles(store.browse_items(
            &ItemFilter::search("cook").with_category(Category::Books).with_condition(Condition::New)
        )),
        vec!["Cookbook"]
    );
}

#[test]
fn suggestions_are_never_persisted() {
    let donor = member(1001, "Ines");
    let requester = member(1002, "Theo");
    let mut store = sequential_store();
    for title in ["Hammer", "Sledgehammer", "Hammock", "Rake"] {
        store.add_item(listing(title, &donor));
    }
    store.add_request(need("Hammer", &requester));
    let items_before = store.items().to_vec();
    let requests_before = store.requests().to_vec();

    let suggested = titles(store.suggest_items("hammer", 3));
    assert_eq!(suggested, vec!["Sledgehammer", "Hammer"]);
    assert_eq!(titles(store.suggest_items("ham", 2)), vec!["Hammock", "Sledgehammer"]);

    assert_eq!(store.items(), items_before.as_slice());
    assert_eq!(store.requests(), requests_before.as_slice());
}

#[test]
fn per_member_listings() {
    let ines = member(1001, "Ines");
    let theo = member(1002, "Theo");
    let mut store = sequential_store();
    store.add_item(listing("Kettle", &ines));
    store.add_item(listing("Drill", &theo));
    store.add_item(listing("Lamp", &ines));
    store.add_request(need("Iron", &theo));

    assert_eq!(titles(store.items_by_donor(ines.id)), vec!["Lamp", "Kettle"]);
    assert_eq!(store.requests_by_requester(theo.id).len(), 1);
    assert!(store.requests_by_requester(ines.id).is_empty());

    store.login(theo);
    assert_eq!(titles(store.my_items()), vec!["Drill"]);
    assert_eq!(store.my_requests()[0].title, "Iron");
}

#[test]
fn community_lookup_and_totals() {
    let mut store = sequential_store();
    assert!(store.current_community().is_none());

    store.login(member(1001, "Ines"));
    assert_eq!(store.current_community().map(|c| c.name.as_str()), Some("Downtown Community"));
    assert!(store.community(4).is_none());

    let totals = store.community_totals();
    assert_eq!(totals.members, 879);
    assert_eq!(totals.items_shared, 4689);
    assert_eq!(totals.co2_saved_kg, 7730);
}
