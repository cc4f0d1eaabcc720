use proptest::prelude::*;
use sharedir::tree::node::flatten;
use sharedir::tree::{derive_path_options, TreeBuilder};
use sharedir::types::{Entry, EntryKind};
use std::collections::BTreeSet;

/// Random closed set of paths: every nested path's parent folder is present.
fn closed_entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec((0usize..64, "[a-z]{1,6}", any::<bool>()), 1..40).prop_map(|specs| {
        let mut entries: Vec<Entry> = Vec::new();
        let mut seen = BTreeSet::new();
        for (parent_pick, name, is_folder) in specs {
            let folders: Vec<String> = entries
                .iter()
                .filter(|e| e.kind == EntryKind::Folder)
                .map(|e| e.path.clone())
                .collect();
            let parent = if folders.is_empty() || parent_pick % (folders.len() + 1) == 0 {
                String::new()
            } else {
                folders[parent_pick % (folders.len() + 1) - 1].clone()
            };
            let path = format!("{}/{}", parent, name);
            if !seen.insert(path.clone()) {
                continue;
            }
            entries.push(if is_folder {
                Entry::folder(name, path)
            } else {
                Entry::file(name, path, "")
            });
        }
        entries
    })
}

proptest! {
    #[test]
    fn flattened_tree_has_same_paths(entries in closed_entries(), seed in any::<u64>()) {
        let expected: BTreeSet<String> = entries.iter().map(|e| e.path.clone()).collect();

        // Any discovery order must give the same set.
        let mut shuffled = entries.clone();
        let len = shuffled.len();
        for i in 0..len {
            let j = ((seed.wrapping_mul(i as u64 + 1)) % len as u64) as usize;
            shuffled.swap(i, j);
        }

        let forest = TreeBuilder::build(shuffled);
        let actual: BTreeSet<String> = flatten(&forest).iter().map(|n| n.path.clone()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(flatten(&forest).len(), entries.len());
    }

    #[test]
    fn option_count_is_one_plus_folders(entries in closed_entries()) {
        let folders = entries.iter().filter(|e| e.kind == EntryKind::Folder).count();
        let forest = TreeBuilder::build(entries);
        let options = derive_path_options(&forest);
        prop_assert_eq!(options.len(), 1 + folders);
        prop_assert_eq!(options[0].value.as_str(), "/");
        prop_assert_eq!(options[0].label.as_str(), "Root (/)");
    }

    #[test]
    fn every_child_sits_under_its_parent(entries in closed_entries()) {
        let forest = TreeBuilder::build(entries);
        for node in flatten(&forest) {
            for child in node.children() {
                prop_assert_eq!(
                    child.path.clone(),
                    format!("{}/{}", node.path, child.name)
                );
            }
        }
    }
}
