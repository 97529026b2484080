use oastree_ast::minim_model::*;

/// OpenAPI 3.x CallbackElement
#[derive(Debug, Clone)]
pub struct CallbackElement {
    pub object: ObjectElement,
}

impl CallbackElement {
    /// 创建一个空的 CallbackElement，element type 为 "callback"
    pub fn new() -> Self {
        let mut obj = ObjectElement::new();
        obj.set_element_type("callback");
        Self { object: obj }
    }

    /// 从已有 ObjectElement 创建，并设置 element type
    pub fn with_content(content: ObjectElement) -> Self {
        let mut content = content;
        content.set_element_type("callback");
        Self { object: content }
    }

    /// 获取指定 callback key 的内容（如：post、get 等 operation path）
    pub fn get(&self, key: &str) -> Option<&Element> {
        self.object.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Element) {
        let key_str = key.into();
        self.object.set(&key_str, value);
    }

    /// 获取整个内容对象
    pub fn content(&self) -> &ObjectElement {
        &self.object
    }

    /// 设置整个内容对象
    pub fn set_content(&mut self, obj: ObjectElement) {
        self.object = obj;
        self.object.set_element_type("callback");
    }
}
