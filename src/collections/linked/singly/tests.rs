#![cfg(test)]

use super::*;
use crate::collections::traits::Collection;
use crate::util::error::NoCurrentElement;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.to_string(), "(1) -> (2) -> (3)");

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_indexed_access() {
    let mut list: SinglyLinkedList<_> = ['a', 'c'].into_iter().collect();
    list.insert(1, 'b');
    list.insert(3, 'd');
    list.insert(0, '_');

    assert_eq!(list.iter().collect::<String>(), "_abcd");
    assert_eq!(list.get(2), &'b');
    assert_eq!(
        list.try_get(5),
        Err(IndexOutOfBounds { index: 5, len: 5 })
    );
    assert_eq!(
        list.try_insert(7, 'x'),
        Err(IndexOutOfBounds { index: 7, len: 5 }),
        "Inserting past the end should fail."
    );

    assert_eq!(list.remove(0), '_');
    assert_eq!(list.remove(3), 'd');
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.iter().collect::<String>(), "abc");

    assert_panics!({
        list.get(3);
    });
}

#[test]
fn test_search_and_remove_item() {
    let mut list: SinglyLinkedList<_> = [4, 8, 15, 8].into_iter().collect();

    assert_eq!(list.index_of(&8), Some(1));
    assert!(list.contains(&15));
    assert!(!list.contains(&16));

    assert!(list.remove_item(&8), "Only the first occurrence should be removed.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [4, 15, 8]);
    assert!(!list.remove_item(&16));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_collection_contract() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.add_all(["x", "y", "x"]), Ok(true));
    assert_eq!(Collection::len(&list), 3, "Lists accept duplicates.");
    assert_eq!(&*list.to_array(), &["x", "y", "x"]);
    assert!(Collection::remove(&mut list, &"x"));
    assert_eq!(&*list.to_array(), &["y", "x"]);
}

#[test]
fn test_clear_and_equality() {
    let mut list: SinglyLinkedList<_> = (0..10_000).collect();
    let copy = list.clone();
    assert_eq!(list, copy);

    list.clear();
    assert!(list.is_empty());
    assert_ne!(list, copy);
    assert_eq!(list, SinglyLinkedList::default());
}

#[test]
fn test_cursor_traversal() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut cursor = list.cursor_mut();

    assert!(cursor.has_next());
    assert_eq!(cursor.next(), Some(&mut 1));
    assert_eq!(cursor.next(), Some(&mut 2));
    *cursor.next().unwrap() *= 10;
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.index(), 3);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 30]);
}

#[test]
fn test_cursor_remove() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3, 4].into_iter().collect();
    let mut cursor = list.cursor_mut();

    assert_eq!(
        cursor.remove_current(),
        Err(NoCurrentElement),
        "Nothing can be removed before the first call to next."
    );

    while let Some(value) = cursor.next() {
        if *value % 2 == 0 {
            cursor.remove_current().unwrap();
            assert_eq!(
                cursor.remove_current(),
                Err(NoCurrentElement),
                "An element can only be removed once."
            );
        }
    }

    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
}

#[test]
fn test_cursor_set_and_insert() {
    let mut list: SinglyLinkedList<_> = ["a", "c"].into_iter().collect();
    let mut cursor = list.cursor_mut();

    assert_eq!(cursor.set_current("z"), Err(NoCurrentElement));
    cursor.insert_before("start");
    cursor.next();
    assert_eq!(cursor.set_current("A"), Ok("a"));

    cursor.insert_before("b");
    assert_eq!(
        cursor.set_current("B"),
        Err(NoCurrentElement),
        "Inserting should clear the current element."
    );
    assert_eq!(cursor.next(), Some(&mut "c"), "Inserted elements are skipped.");
    cursor.insert_before("end");
    assert_eq!(cursor.next(), None);

    assert_eq!(list.len(), 5);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        ["start", "A", "b", "c", "end"]
    );
}

#[test]
fn test_cursor_on_empty_list() {
    let mut list = SinglyLinkedList::<u8>::new();
    let mut cursor = list.cursor_mut();
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
    cursor.insert_before(5);
    assert_eq!(cursor.next(), None);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5]);
}
