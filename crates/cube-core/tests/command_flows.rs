//! End-to-end command scenarios against a recording storage.

mod common;

use common::{RecordingStorage, food_list};
use cube_core::{
    AddCommand, Command, CommandError, DeleteCommand, EditCommand, FindCommand, FoodItem,
    FoodList, FoodStorage, FoodUpdate, ListCommand, Selection, SoldCommand,
};

#[test]
fn delete_first_index_of_two() {
    let mut list = food_list(&[("Apple", "Fruit"), ("Bread", "Grain")]);
    let storage = RecordingStorage::new();

    let result = DeleteCommand::with_index(1, "INDEX")
        .unwrap()
        .execute(&mut list, &storage)
        .unwrap();

    assert_eq!(result.foods[0].name, "Apple");
    assert!(result.feedback.ends_with("Now you have 1 food in the list."));
    assert_eq!(list, food_list(&[("Bread", "Grain")]));
    assert_eq!(storage.save_count(), 1);
    assert_eq!(storage.last_save().unwrap(), list);
}

#[test]
fn delete_unknown_name_keeps_list() {
    let mut list = food_list(&[("Apple", "Fruit"), ("Bread", "Grain")]);
    let storage = RecordingStorage::new();

    let err = DeleteCommand::with_description("Milk", "NAME")
        .unwrap()
        .execute(&mut list, &storage)
        .unwrap_err();

    assert!(matches!(err, CommandError::FoodNotExists));
    assert_eq!(list.len(), 2);
    assert_eq!(storage.save_count(), 0);
}

#[test]
fn delete_whole_type() {
    let mut list = food_list(&[("Apple", "Fruit"), ("Banana", "Fruit"), ("Bread", "Grain")]);
    let storage = RecordingStorage::new();

    let result = DeleteCommand::with_description("Fruit", "TYPE")
        .unwrap()
        .execute(&mut list, &storage)
        .unwrap();

    assert!(result.feedback.contains("This type contains 2 food items"));
    assert!(result.feedback.ends_with("Now you have 1 food in the list."));
    assert_eq!(list, food_list(&[("Bread", "Grain")]));
    assert_eq!(storage.save_count(), 1);
}

#[test]
fn delete_from_empty_list() {
    let mut list = food_list(&[]);
    let storage = RecordingStorage::new();

    let err = DeleteCommand::with_index(1, "INDEX")
        .unwrap()
        .execute(&mut list, &storage)
        .unwrap_err();

    assert!(matches!(err, CommandError::FoodNotExists));
    assert_eq!(storage.save_count(), 0);
}

#[test]
fn session_of_mixed_commands_saves_once_per_mutation() {
    let mut list = food_list(&[]);
    let storage = RecordingStorage::new();

    let commands: Vec<Command> = vec![
        AddCommand::new(FoodItem::new("Apple", "Fruit").with_price(1.0).with_stock(10)).into(),
        AddCommand::new(FoodItem::new("Bread", "Grain").with_price(2.0).with_stock(3)).into(),
        ListCommand::default().into(),
        SoldCommand::new("apple", 4).into(),
        FindCommand::new(Selection::food_type("fruit")).into(),
        EditCommand::new("Bread", vec![FoodUpdate::Stock(8)]).into(),
        DeleteCommand::new(Selection::name("APPLE")).into(),
    ];

    let mut mutations = 0;
    for command in commands {
        if command.is_mutating() {
            mutations += 1;
        }
        command.execute(&mut list, &storage).unwrap();
        assert_eq!(storage.save_count(), mutations);
    }

    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().stock, 8);
    assert_eq!(storage.load_food_list().unwrap(), list);
}

#[test]
fn storage_failure_is_reported_but_list_changed() {
    let mut list = food_list(&[("Apple", "Fruit"), ("Bread", "Grain")]);
    let storage = RecordingStorage::failing();

    let err = DeleteCommand::new(Selection::food_type("Grain"))
        .execute(&mut list, &storage)
        .unwrap_err();

    assert!(matches!(err, CommandError::Storage(_)));
    assert!(err.to_string().contains("read-only file system"));
    assert_eq!(list, food_list(&[("Apple", "Fruit")]));
}

#[test]
fn padded_names_and_types_find_stored_entries() {
    let mut list = FoodList::from_items(vec![
        FoodItem::new("Apple", "Fruit").with_stock(5),
        FoodItem::new("Bread", "Grain"),
    ])
    .unwrap();
    let storage = RecordingStorage::new();

    let found = FindCommand::new(Selection::name(" Apple "))
        .execute(&list, &storage)
        .unwrap();
    assert_eq!(found.foods[0].name, "Apple");

    SoldCommand::new(" apple ", 2)
        .execute(&mut list, &storage)
        .unwrap();
    assert_eq!(list.get(0).unwrap().stock, 3);

    EditCommand::new(" Apple ", vec![FoodUpdate::Stock(9)])
        .execute(&mut list, &storage)
        .unwrap();
    assert_eq!(list.get(0).unwrap().stock, 9);

    let removed = DeleteCommand::new(Selection::name(" Apple "))
        .execute(&mut list, &storage)
        .unwrap();
    assert_eq!(removed.foods[0].name, "Apple");

    DeleteCommand::new(Selection::food_type("  grain "))
        .execute(&mut list, &storage)
        .unwrap();
    assert!(list.is_empty());
    assert_eq!(storage.save_count(), 4);
}

#[test]
fn padded_name_is_still_a_duplicate() {
    let mut list = food_list(&[("Apple", "Fruit")]);
    let storage = RecordingStorage::new();

    let err = AddCommand::new(FoodItem::new("  apple", "Fruit"))
        .execute(&mut list, &storage)
        .unwrap_err();

    assert!(matches!(err, CommandError::FoodAlreadyExists(_)));
    assert_eq!(storage.save_count(), 0);
}
