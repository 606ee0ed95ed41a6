use std::collections::HashMap;

/// Immutable mapping from label name to YOLO class id.
///
/// Built once from the ordered label list before any file is processed; ids
/// follow list order, so the list doubles as the class ordering of the
/// downstream dataset.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    label_map: HashMap<String, usize>,
}

impl LabelRegistry {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label_map = labels
            .into_iter()
            .enumerate()
            .map(|(id, label)| (label.into(), id))
            .collect();
        Self { label_map }
    }

    /// Exact-match lookup of a label name to its class id.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.label_map.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.label_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_map.is_empty()
    }
}
