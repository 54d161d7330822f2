//! Parse context: the event-driven parser state threaded through the
//! dispatcher.

use indexmap::IndexMap;

use crate::classify::ElementKind;
use crate::log::ParseLog;
use crate::model::Document;

/// An element currently open on the stack.
#[derive(Debug, Clone)]
pub struct OpenElement {
    pub tag: String,
    pub kind: ElementKind,
    pub attrs: IndexMap<String, String>,
}

/// Marks which element currently wants the accumulated text when it
/// closes. Routing the committed string to the right model field
/// happens in `postprocess` by consulting `ElementKind` and the
/// context's "current entity" fields, so this only needs to record
/// *that* text is expected, not *where* it ultimately lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSink {
    Id,
    Name,
    Desc,
    Default,
    UserVisible,
    LangOnly,
    DisplayOrder,
    PackageReqName,
    GroupIdName,
}

/// The event-driven parser state.
pub struct ParseContext {
    pub encoding: String,
    pub elem_stack: Vec<OpenElement>,
    pub text_buffer: Vec<String>,
    pub text_buffer_len: usize,
    pub text_sink: Option<TextSink>,
    pub tmp_buffer: String,
    pub document: Document,
    pub log: ParseLog,
    pub fatal: bool,

    /// Index of the most recently opened Group/Category/Environment.
    /// Opening any one of the three clears the other two.
    pub current_group: Option<usize>,
    pub current_category: Option<usize>,
    pub current_env: Option<usize>,

    /// When set, reproduces a known quirk where a repeated `<langonly>`
    /// tag's "already set" check is effectively never triggered. Default
    /// is `false`: write (and read) the current Group consistently.
    pub lang_only_compat: bool,

    /// Where `preprocess` appended the `GroupId` currently open on the
    /// stack, so `postprocess` can assign its name without re-deriving
    /// the parent/grandparent routing. `None` means the element was
    /// rejected at `preprocess` time (already logged there).
    pub pending_group_id: Option<crate::dispatcher::GroupIdTarget>,

    /// Set only when `pending_group_id` is `None` because the
    /// parent/grandparent shape was valid but the current Category/Env
    /// container wasn't open. `postprocess` consumes this to emit
    /// `GroupListNotSet`/`OptionListNotSet`; a shape mismatch (already
    /// logged as `NoParent` in `preprocess`) leaves this `None` too, so
    /// it doesn't warn a second time.
    pub pending_group_id_missing_container: Option<crate::log::Code>,
}

impl ParseContext {
    pub fn new(encoding: impl Into<String>) -> Self {
        let encoding = encoding.into();
        Self {
            document: Document::new(encoding.clone()),
            encoding,
            elem_stack: Vec::new(),
            text_buffer: Vec::new(),
            text_buffer_len: 0,
            text_sink: None,
            tmp_buffer: String::new(),
            log: ParseLog::new(),
            fatal: false,
            current_group: None,
            current_category: None,
            current_env: None,
            lang_only_compat: false,
            pending_group_id: None,
            pending_group_id_missing_container: None,
        }
    }

    pub fn reinit(&mut self) {
        let encoding = self.encoding.clone();
        self.document = Document::new(encoding);
        self.elem_stack.clear();
        self.text_buffer.clear();
        self.text_buffer_len = 0;
        self.text_sink = None;
        self.tmp_buffer.clear();
        self.log.clear();
        self.fatal = false;
        self.current_group = None;
        self.current_category = None;
        self.current_env = None;
        self.pending_group_id = None;
        self.pending_group_id_missing_container = None;
    }

    pub fn parent_kind(&self) -> Option<ElementKind> {
        let len = self.elem_stack.len();
        if len < 2 {
            return None;
        }
        Some(self.elem_stack[len - 2].kind)
    }

    pub fn grandparent_kind(&self) -> Option<ElementKind> {
        let len = self.elem_stack.len();
        if len < 3 {
            return None;
        }
        Some(self.elem_stack[len - 3].kind)
    }

    pub fn top(&self) -> Option<&OpenElement> {
        self.elem_stack.last()
    }
}
