use bst::Tree;

use quickcheck::TestResult;

quickcheck::quickcheck! {
    fn len_counts_insertions(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.len() == xs.len() && tree.in_order().count() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn in_order_matches_sorted_input(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        tree.to_sorted_vec() == sorted
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn delete_removes_exactly_one_copy(xs: Vec<i8>, index: usize) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }
        let victim = xs[index % xs.len()];
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut expected = tree.to_sorted_vec();
        if let Ok(at) = expected.binary_search(&victim) {
            expected.remove(at);
        }

        let deleted = tree.delete(&victim);
        let still_there = xs.iter().filter(|x| **x == victim).count() > 1;

        TestResult::from_bool(
            deleted == Some(victim)
                && tree.to_sorted_vec() == expected
                && tree.contains(&victim) == still_there
                && tree.len() == xs.len() - 1,
        )
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            while tree.delete(delete).is_some() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));
        still_present.sort();

        deletes.iter().all(|x| !tree.contains(x)) && tree.to_sorted_vec() == still_present
    }
}

quickcheck::quickcheck! {
    fn balance_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.balance();
        let once = (tree.to_vec(), tree.height());
        tree.balance();

        (tree.to_vec(), tree.height()) == once
    }
}

quickcheck::quickcheck! {
    fn balanced_height_is_minimal(xs: Vec<u8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.balance();

        let n = xs.len() as f64;
        tree.height() <= (n + 1.0).log2().ceil() as usize && tree.is_balanced()
    }
}
