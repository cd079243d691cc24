use contracts::enums::Direction;
use wasm_bindgen::JsValue;

/// Element that carries the document-wide `dir` and `lang` attributes.
pub trait DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), JsValue>;
}

impl DocumentRoot for web_sys::Element {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), JsValue> {
        web_sys::Element::set_attribute(self, name, value)
    }
}

/// Write `lang` and the derived `dir` onto `root`.
///
/// Synchronous; unknown tags get `ltr`.
pub fn sync_document(root: &impl DocumentRoot, tag: &str) -> Direction {
    let direction = Direction::for_tag(tag);
    let _ = root.set_attribute("dir", direction.as_attr());
    let _ = root.set_attribute("lang", tag);
    direction
}

/// Apply to the live `<html>` element, if there is one.
pub fn sync_html_element(tag: &str) -> Option<Direction> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())?;
    let direction = sync_document(&root, tag);
    log::debug!("document lang='{tag}' dir='{}'", direction.as_attr());
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeRoot {
        attrs: RefCell<HashMap<String, String>>,
    }

    impl FakeRoot {
        fn attr(&self, name: &str) -> Option<String> {
            self.attrs.borrow().get(name).cloned()
        }
    }

    impl DocumentRoot for FakeRoot {
        fn set_attribute(&self, name: &str, value: &str) -> Result<(), JsValue> {
            self.attrs
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn arabic_sets_rtl() {
        let root = FakeRoot::default();
        assert_eq!(sync_document(&root, "ar"), Direction::Rtl);
        assert_eq!(root.attr("dir").as_deref(), Some("rtl"));
        assert_eq!(root.attr("lang").as_deref(), Some("ar"));
    }

    #[test]
    fn english_and_unknown_tags_set_ltr() {
        let root = FakeRoot::default();
        for tag in ["en", "fr", "xx"] {
            assert_eq!(sync_document(&root, tag), Direction::Ltr);
            assert_eq!(root.attr("dir").as_deref(), Some("ltr"));
            assert_eq!(root.attr("lang").as_deref(), Some(tag));
        }
    }

    #[test]
    fn switching_back_and_forth_always_reflects_latest() {
        let root = FakeRoot::default();
        sync_document(&root, "ar");
        sync_document(&root, "en");
        assert_eq!(root.attr("dir").as_deref(), Some("ltr"));
        sync_document(&root, "ar");
        assert_eq!(root.attr("dir").as_deref(), Some("rtl"));
    }
}
