use bst::{EmptyTreeError, Tree};

fn sample() -> Tree<i32> {
    [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
}

#[test]
fn full_tree_of_seven() {
    let tree = sample();

    assert_eq!(tree.to_sorted_vec(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&9));
    assert_eq!(tree.height(), 3);
    assert!(tree.is_balanced());
    assert_eq!(tree.len(), 7);
}

#[test]
fn deleting_the_root_promotes_its_successor() {
    let mut tree = sample();

    assert_eq!(tree.delete(&5), Some(5));

    assert_eq!(tree.to_sorted_vec(), vec![1, 3, 4, 7, 8, 9]);
    assert!(!tree.contains(&5));
    assert!(tree.contains(&7));
    assert_eq!(tree.pre_order().next(), Some(&7));
}

#[test]
fn balancing_a_chain() {
    let mut tree: Tree<_> = (1..=5).collect();
    assert_eq!(tree.height(), 5);
    assert!(!tree.is_balanced());

    tree.balance();

    assert_eq!(tree.height(), 3);
    assert!(tree.is_balanced());
    assert_eq!(tree.to_sorted_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn empty_tree() {
    let mut tree: Tree<i32> = Tree::new();

    assert_eq!(tree.min(), Err(EmptyTreeError));
    assert_eq!(tree.max(), Err(EmptyTreeError));
    assert_eq!(tree.delete(&42), None);
    assert_eq!(tree.height(), 0);
    assert!(tree.is_balanced());
    assert_eq!(tree.to_string(), "Tree()");
}

#[test]
fn default_iteration_is_in_order() {
    let tree = sample();
    let mut seen = Vec::new();
    for value in &tree {
        seen.push(*value);
    }

    assert_eq!(seen, tree.to_sorted_vec());
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), seen);
}

#[test]
fn strings_are_ordered_lexicographically() {
    let mut tree: Tree<String> = ["pear", "apple", "fig", "banana"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(tree.min().map(String::as_str), Ok("apple"));
    assert_eq!(tree.delete(&"pear".to_string()).as_deref(), Some("pear"));
    assert_eq!(tree.to_string(), "Tree(apple, banana, fig)");
}
