use super::*;

#[test]
fn absent_entry_reads_as_none() {
    let amounts = PendingAmounts::new();
    assert_eq!(amounts.get(CounterpartyId(1)), None);
    assert!(amounts.is_empty());
}

#[test]
fn updating_one_counterparty_leaves_siblings_untouched() {
    let amounts = PendingAmounts::new()
        .with_amount(CounterpartyId(1), "10")
        .with_amount(CounterpartyId(2), "5");

    let updated = amounts.with_amount(CounterpartyId(1), "12");

    assert_eq!(updated.get(CounterpartyId(1)), Some("12"));
    assert_eq!(updated.get(CounterpartyId(2)), Some("5"));
}

#[test]
fn explicit_empty_entry_differs_from_no_entry() {
    let amounts = PendingAmounts::new().with_amount(CounterpartyId(3), "");

    assert_eq!(amounts.get(CounterpartyId(3)), Some(""));
    assert!(amounts.contains(CounterpartyId(3)));
    assert_ne!(amounts, PendingAmounts::new());
}

#[test]
fn earlier_snapshots_do_not_observe_later_updates() {
    let before = PendingAmounts::new().with_amount(CounterpartyId(1), "10");
    let after = before.with_amount(CounterpartyId(1), "99");

    assert_eq!(before.get(CounterpartyId(1)), Some("10"));
    assert_eq!(after.get(CounterpartyId(1)), Some("99"));
}

#[test]
fn keys_are_never_dropped_by_updates() {
    let mut amounts = PendingAmounts::new();
    for (id, raw) in [(1, "1"), (2, ""), (1, ""), (3, "-4"), (2, "abc")] {
        amounts = amounts.with_amount(CounterpartyId(id), raw);
    }

    assert_eq!(amounts.len(), 3);
    let mut entries: Vec<_> = amounts.iter().collect();
    entries.sort();
    assert_eq!(
        entries,
        [
            (CounterpartyId(1), ""),
            (CounterpartyId(2), "abc"),
            (CounterpartyId(3), "-4"),
        ]
    );
}
