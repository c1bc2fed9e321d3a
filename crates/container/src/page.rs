use super::container::Container;
use resource_taglib::{PageContext, Scope, ServletContext};
use std::collections::BTreeMap;
use std::io;

/// Page state for one request: the attributes set and the text printed
pub struct RequestPage<'a> {
    container: &'a Container,
    attributes: BTreeMap<String, (String, Scope)>,
    output: String,
}

impl<'a> RequestPage<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            container,
            attributes: BTreeMap::new(),
            output: String::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|(value, _)| value.as_str())
    }

    pub fn attributes(&self) -> &BTreeMap<String, (String, Scope)> {
        &self.attributes
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_parts(self) -> (BTreeMap<String, (String, Scope)>, String) {
        (self.attributes, self.output)
    }
}

impl PageContext for RequestPage<'_> {
    fn servlet_context(&self) -> &dyn ServletContext {
        self.container
    }

    fn set_attribute(&mut self, name: &str, value: String, scope: Scope) {
        self.attributes.insert(name.to_string(), (value, scope));
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_taglib::{ContextHandle, ResourceIncludeTag};

    #[test]
    fn tag_prints_into_page() {
        let container = Container::new("/TestContext")
            .deploy(ContextHandle::new("/ResourceServingWebapp"));
        let mut page = RequestPage::new(&container);

        let mut tag = ResourceIncludeTag::new();
        tag.set_value("js/portal.js");
        tag.evaluate(&mut page).unwrap();

        assert_eq!(page.output(), "/ResourceServingWebapp/js/portal.js");
        assert!(page.attributes().is_empty());
    }

    #[test]
    fn tag_stores_attribute_in_page() {
        let container = Container::new("/TestContext");
        let mut page = RequestPage::new(&container);

        let mut tag = ResourceIncludeTag::new();
        tag.set_value("/test/resource");
        tag.set_var("var");
        tag.evaluate(&mut page).unwrap();

        assert_eq!(page.attribute("var"), Some("/TestContext/test/resource"));
        assert_eq!(page.output(), "");
    }
}
