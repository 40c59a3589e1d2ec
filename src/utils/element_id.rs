use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, e.g. for keyed state owned by a component.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// Derives the id of the `index`th item in a collection.
    fn with_index(&self, index: usize) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }

    fn with_index(&self, index: usize) -> ElementId {
        self.with_suffix(SharedString::from(format!("item:{index}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_ids_differ() {
        let parent = ElementId::from("chips");

        assert_ne!(parent.with_index(0), parent.with_index(1));
        assert_ne!(parent.with_suffix("a"), parent);
        assert_eq!(parent.with_index(3), parent.with_index(3));
    }
}
