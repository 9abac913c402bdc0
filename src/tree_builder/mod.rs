//! Tree builder: tokens in, DOM mutations out.
//!
//! The insertion-mode state machine. For each token the dispatcher picks
//! HTML or foreign content rules, invokes the current mode's handler, and
//! reprocesses on request without advancing the input. Handlers mutate the
//! document through the shared primitives below; the builder also reaches
//! back into the tokenizer to switch it into RCDATA / RAWTEXT / script-data
//! / PLAINTEXT at element-specific boundaries.
//!
//! Failure posture: the builder never aborts. Every violation records a
//! parse error and applies the documented recovery; impossible stack states
//! are `debug_assert!`ed and degrade to ignoring the token in release.

use crate::dom::{Document, Namespace, NodeId, ParserStats};
use crate::error::{ErrorSink, ParseErrorCode};
use crate::token::{TagToken, Token};
use crate::tokenizer::{State, Tokenizer};

mod foreign;
mod formatting;
mod modes;
mod rules;
mod stack;
mod tables;
#[cfg(test)]
mod tests;

use formatting::ActiveFormattingList;
pub(crate) use modes::InsertionMode;
use stack::OpenElementsStack;

/// Handler outcome: either the token was consumed, or it must be
/// re-dispatched (possibly under a new insertion mode) without advancing the
/// input.
enum Outcome {
    Done,
    Reprocess(Token),
}

/// (parent, before-child-or-end) handle produced by "appropriate place for
/// inserting a node"; implements foster parenting when enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InsertionPoint {
    parent: NodeId,
    before: Option<NodeId>,
}

pub(crate) struct TreeBuilder {
    doc: Document,
    mode: InsertionMode,
    original_mode: InsertionMode,
    template_modes: Vec<InsertionMode>,
    open: OpenElementsStack,
    formatting: ActiveFormattingList,
    head: Option<NodeId>,
    form: Option<NodeId>,
    frameset_ok: bool,
    scripting: bool,
    foster_parenting: bool,
    pending_table_text: Vec<char>,
    /// The next character token is dropped if it is a LF (after `pre`,
    /// `listing`, `textarea` start tags).
    ignore_next_lf: bool,
    stopped: bool,
    /// Byte offset of the tokenizer cursor when the current token was
    /// dispatched; stamps tree-construction parse errors.
    cursor: usize,
}

impl TreeBuilder {
    pub(crate) fn new(scripting: bool) -> Self {
        Self {
            doc: Document::new(scripting),
            mode: InsertionMode::Initial,
            original_mode: InsertionMode::Initial,
            template_modes: Vec::new(),
            open: OpenElementsStack::default(),
            formatting: ActiveFormattingList::default(),
            head: None,
            form: None,
            frameset_ok: true,
            scripting,
            foster_parenting: false,
            pending_table_text: Vec::new(),
            ignore_next_lf: false,
            stopped: false,
            cursor: 0,
        }
    }

    fn err(&self, errors: &mut ErrorSink, code: ParseErrorCode) {
        errors.record(code, self.cursor);
    }

    /// Dispatch one token. May reenter handlers ("process the token using
    /// the rules for ...") and loop on reprocess requests; both stay on this
    /// call stack, so token order and DOM mutation order are total.
    pub(crate) fn process_token(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) {
        if self.stopped {
            return;
        }
        self.cursor = tokenizer.pos();
        if self.ignore_next_lf {
            self.ignore_next_lf = false;
            if matches!(token, Token::Character { scalar: '\n' }) {
                return;
            }
        }
        let mut token = token;
        loop {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(
                target: "html.tree_builder",
                "mode {:?} token {}",
                self.mode,
                token.summary()
            );
            let outcome = if self.use_foreign_rules(&token) {
                self.process_foreign(token, tokenizer, errors)
            } else {
                self.process_in_mode(self.mode, token, tokenizer, errors)
            };
            match outcome {
                Outcome::Done => break,
                Outcome::Reprocess(t) => token = t,
            }
        }
    }

    /// Mirrors "the adjusted current node is not in the HTML namespace";
    /// drives the tokenizer's `<![CDATA[` recognition.
    pub(crate) fn adjusted_current_is_foreign(&self) -> bool {
        self.adjusted_current_node()
            .and_then(|id| self.doc.elem(id))
            .is_some_and(|e| e.namespace != Namespace::Html)
    }

    pub(crate) fn finish(mut self, errors: ErrorSink, tokenizer: &Tokenizer) -> Document {
        let tok = tokenizer.stats();
        let stats = ParserStats {
            tokens_emitted: tok.tokens_emitted,
            state_transitions: tok.state_transitions,
            parse_errors: errors.total(),
            max_open_elements_depth: self.open.max_depth(),
            max_formatting_depth: self.formatting.max_depth(),
        };
        let total = errors.total();
        self.doc.set_errors(errors.into_errors(), total);
        self.doc.set_stats(stats);
        self.doc
    }

    fn process_in_mode(
        &mut self,
        mode: InsertionMode,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match mode {
            InsertionMode::Initial => self.mode_initial(token, errors),
            InsertionMode::BeforeHtml => self.mode_before_html(token, errors),
            InsertionMode::BeforeHead => self.mode_before_head(token, tokenizer, errors),
            InsertionMode::InHead => self.mode_in_head(token, tokenizer, errors),
            InsertionMode::InHeadNoscript => self.mode_in_head_noscript(token, tokenizer, errors),
            InsertionMode::AfterHead => self.mode_after_head(token, tokenizer, errors),
            InsertionMode::InBody => self.mode_in_body(token, tokenizer, errors),
            InsertionMode::Text => self.mode_text(token, errors),
            InsertionMode::InTable => self.mode_in_table(token, tokenizer, errors),
            InsertionMode::InTableText => self.mode_in_table_text(token, tokenizer, errors),
            InsertionMode::InCaption => self.mode_in_caption(token, tokenizer, errors),
            InsertionMode::InColumnGroup => self.mode_in_column_group(token, tokenizer, errors),
            InsertionMode::InTableBody => self.mode_in_table_body(token, tokenizer, errors),
            InsertionMode::InRow => self.mode_in_row(token, tokenizer, errors),
            InsertionMode::InCell => self.mode_in_cell(token, tokenizer, errors),
            InsertionMode::InSelect => self.mode_in_select(token, tokenizer, errors),
            InsertionMode::InSelectInTable => self.mode_in_select_in_table(token, tokenizer, errors),
            InsertionMode::InTemplate => self.mode_in_template(token, tokenizer, errors),
            InsertionMode::AfterBody => self.mode_after_body(token, tokenizer, errors),
            InsertionMode::InFrameset => self.mode_in_frameset(token, tokenizer, errors),
            InsertionMode::AfterFrameset => self.mode_after_frameset(token, tokenizer, errors),
            InsertionMode::AfterAfterBody => self.mode_after_after_body(token, tokenizer, errors),
            InsertionMode::AfterAfterFrameset => {
                self.mode_after_after_frameset(token, tokenizer, errors)
            }
        }
    }

    // --- dispatcher: HTML vs foreign content ---

    fn use_foreign_rules(&self, token: &Token) -> bool {
        let Some(acn) = self.adjusted_current_node() else {
            return false;
        };
        let Some(elem) = self.doc.elem(acn) else {
            return false;
        };
        if elem.namespace == Namespace::Html {
            return false;
        }
        if matches!(token, Token::Eof) {
            return false;
        }
        let is_char = matches!(token, Token::Character { .. });
        let start_name = match token {
            Token::StartTag(tag) => Some(tag.name.as_str()),
            _ => None,
        };
        if self.is_mathml_text_integration_point(acn) {
            if is_char {
                return false;
            }
            if let Some(name) = start_name
                && name != "mglyph"
                && name != "malignmark"
            {
                return false;
            }
        }
        if elem.is(Namespace::MathMl, "annotation-xml") && start_name == Some("svg") {
            return false;
        }
        if self.is_html_integration_point(acn) && (is_char || start_name.is_some()) {
            return false;
        }
        true
    }

    /// Context element if parsing a fragment with a single-element stack;
    /// no fragment parsing here, so always the current node.
    fn adjusted_current_node(&self) -> Option<NodeId> {
        self.open.current()
    }

    fn is_mathml_text_integration_point(&self, id: NodeId) -> bool {
        self.doc.elem(id).is_some_and(|e| {
            e.namespace == Namespace::MathMl
                && matches!(e.local.as_str(), "mi" | "mo" | "mn" | "ms" | "mtext")
        })
    }

    fn is_html_integration_point(&self, id: NodeId) -> bool {
        let Some(elem) = self.doc.elem(id) else {
            return false;
        };
        match elem.namespace {
            Namespace::Svg => matches!(elem.local.as_str(), "foreignObject" | "desc" | "title"),
            Namespace::MathMl => {
                elem.local == "annotation-xml"
                    && elem.attr("encoding").is_some_and(|v| {
                        v.eq_ignore_ascii_case("text/html")
                            || v.eq_ignore_ascii_case("application/xhtml+xml")
                    })
            }
            _ => false,
        }
    }

    // --- shared primitives ---

    fn current_node(&self) -> Option<NodeId> {
        self.open.current()
    }

    fn current_is_html(&self, local: &str) -> bool {
        self.current_node()
            .is_some_and(|id| self.doc.is_html_element(id, local))
    }

    /// "Appropriate place for inserting a node", with foster parenting when
    /// enabled and the target is a table-family element.
    fn appropriate_insertion_point(&self, override_target: Option<NodeId>) -> InsertionPoint {
        let target = override_target
            .or_else(|| self.current_node())
            .unwrap_or(NodeId::DOCUMENT);
        let foster = self.foster_parenting
            && self.doc.elem(target).is_some_and(|e| {
                e.namespace == Namespace::Html
                    && matches!(
                        e.local.as_str(),
                        "table" | "tbody" | "tfoot" | "thead" | "tr"
                    )
            });
        if !foster {
            return InsertionPoint {
                parent: target,
                before: None,
            };
        }
        let last_table = self
            .open
            .iter()
            .rev()
            .find(|&id| self.doc.is_html_element(id, "table"));
        match last_table {
            Some(table) => match self.doc.parent(table) {
                Some(parent) => InsertionPoint {
                    parent,
                    before: Some(table),
                },
                None => {
                    let index = self.open.index_of(table).unwrap_or(1);
                    InsertionPoint {
                        parent: self.open.get(index.saturating_sub(1)).unwrap_or(target),
                        before: None,
                    }
                }
            },
            None => InsertionPoint {
                parent: self.open.first().unwrap_or(NodeId::DOCUMENT),
                before: None,
            },
        }
    }

    fn insert_at(&mut self, point: InsertionPoint, node: NodeId) {
        self.doc.insert_at(point.parent, node, point.before);
    }

    /// Insert a character with text-node coalescing. Never inserts under the
    /// Document node.
    fn insert_character(&mut self, scalar: char) {
        let point = self.appropriate_insertion_point(None);
        if point.parent == NodeId::DOCUMENT {
            return;
        }
        let prev = match point.before {
            Some(before) => self.doc.prev_sibling(before),
            None => self.doc.last_child(point.parent),
        };
        if let Some(prev) = prev
            && let Some(text) = self.doc.text_data_mut(prev)
        {
            text.push(scalar);
            return;
        }
        let text = self.doc.create_text(scalar.to_string());
        self.insert_at(point, text);
    }

    fn insert_comment(&mut self, data: String, position: Option<InsertionPoint>) {
        let point = position.unwrap_or_else(|| self.appropriate_insertion_point(None));
        let comment = self.doc.create_comment(data);
        self.insert_at(point, comment);
    }

    fn insert_comment_on_document(&mut self, data: String) {
        self.insert_comment(
            data,
            Some(InsertionPoint {
                parent: NodeId::DOCUMENT,
                before: None,
            }),
        );
    }

    /// Comment as the last child of the root html element (AfterBody rule).
    fn insert_comment_on_root(&mut self, data: String) {
        match self.open.first() {
            Some(root) => self.insert_comment(
                data,
                Some(InsertionPoint {
                    parent: root,
                    before: None,
                }),
            ),
            None => self.insert_comment_on_document(data),
        }
    }

    /// "Create an element for a token". No scripts run and no custom
    /// element registry exists, so this reduces to node construction plus
    /// the script bookkeeping flag.
    fn create_element_for_token(&mut self, tag: &TagToken, namespace: Namespace) -> NodeId {
        let id = self
            .doc
            .create_element(namespace, None, tag.name.clone(), tag.attrs.clone());
        if namespace == Namespace::Html
            && tag.name == "script"
            && let Some(elem) = self.doc.elem_mut(id)
        {
            elem.flags.parser_inserted = true;
        }
        id
    }

    /// Insert an HTML element for a non-void start tag and push it. A
    /// self-closing flag on such a tag is never acknowledged.
    fn insert_html_element(&mut self, tag: &TagToken, errors: &mut ErrorSink) -> NodeId {
        if tag.self_closing {
            self.err(
                errors,
                ParseErrorCode::NonVoidHtmlElementStartTagWithTrailingSolidus,
            );
        }
        self.insert_element(tag, Namespace::Html)
    }

    /// Insert a void HTML element: inserted, immediately popped, and the
    /// self-closing flag acknowledged.
    fn insert_void_html_element(&mut self, tag: &TagToken) {
        self.insert_element(tag, Namespace::Html);
        self.open.pop();
    }

    fn insert_element(&mut self, tag: &TagToken, namespace: Namespace) -> NodeId {
        let point = self.appropriate_insertion_point(None);
        let id = self.create_element_for_token(tag, namespace);
        self.insert_at(point, id);
        self.open.push(id);
        id
    }

    /// Merge token attributes onto an existing element, keeping existing
    /// values (html/body second-start-tag rule).
    fn merge_attributes(&mut self, target: NodeId, tag: &TagToken) {
        let Some(elem) = self.doc.elem_mut(target) else {
            return;
        };
        for attr in &tag.attrs {
            if elem.attrs.iter().all(|a| a.name != attr.name) {
                elem.attrs.push(attr.clone());
            }
        }
    }

    fn generate_implied_end_tags(&mut self, except: Option<&str>) {
        loop {
            let Some(current) = self.current_node() else {
                return;
            };
            let Some(elem) = self.doc.elem(current) else {
                return;
            };
            if elem.namespace != Namespace::Html {
                return;
            }
            let implied = matches!(
                elem.local.as_str(),
                "dd" | "dt" | "li" | "optgroup" | "option" | "p" | "rb" | "rp" | "rt" | "rtc"
            );
            if !implied || except == Some(elem.local.as_str()) {
                return;
            }
            self.open.pop();
        }
    }

    /// Thorough variant used by `</template>`: also closes table structure.
    fn generate_all_implied_end_tags_thoroughly(&mut self) {
        loop {
            let Some(current) = self.current_node() else {
                return;
            };
            let Some(elem) = self.doc.elem(current) else {
                return;
            };
            if elem.namespace != Namespace::Html {
                return;
            }
            let implied = matches!(
                elem.local.as_str(),
                "caption" | "colgroup" | "dd" | "dt" | "li" | "optgroup" | "option" | "p" | "rb"
                    | "rp" | "rt" | "rtc" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
            );
            if !implied {
                return;
            }
            self.open.pop();
        }
    }

    fn close_p_element(&mut self, errors: &mut ErrorSink) {
        self.generate_implied_end_tags(Some("p"));
        if !self.current_is_html("p") {
            self.err(errors, ParseErrorCode::MisnestedTag);
        }
        self.open.pop_until_one_of(&self.doc, &["p"]);
    }

    /// "Reset the insertion mode appropriately" from the open-element stack.
    fn reset_insertion_mode(&mut self) {
        for (index, id) in self.open.iter().enumerate().rev() {
            let last = index == 0;
            let Some(elem) = self.doc.elem(id) else {
                continue;
            };
            if elem.namespace != Namespace::Html {
                if last {
                    break;
                }
                continue;
            }
            match elem.local.as_str() {
                "select" => {
                    self.mode = InsertionMode::InSelect;
                    for above in self.open.iter().take(index).rev() {
                        if self.doc.is_html_element(above, "template") {
                            break;
                        }
                        if self.doc.is_html_element(above, "table") {
                            self.mode = InsertionMode::InSelectInTable;
                            break;
                        }
                    }
                    return;
                }
                "td" | "th" if !last => {
                    self.mode = InsertionMode::InCell;
                    return;
                }
                "tr" => {
                    self.mode = InsertionMode::InRow;
                    return;
                }
                "tbody" | "thead" | "tfoot" => {
                    self.mode = InsertionMode::InTableBody;
                    return;
                }
                "caption" => {
                    self.mode = InsertionMode::InCaption;
                    return;
                }
                "colgroup" => {
                    self.mode = InsertionMode::InColumnGroup;
                    return;
                }
                "table" => {
                    self.mode = InsertionMode::InTable;
                    return;
                }
                "template" => {
                    self.mode = self
                        .template_modes
                        .last()
                        .copied()
                        .unwrap_or(InsertionMode::InBody);
                    return;
                }
                "head" if !last => {
                    self.mode = InsertionMode::InHead;
                    return;
                }
                "body" => {
                    self.mode = InsertionMode::InBody;
                    return;
                }
                "frameset" => {
                    self.mode = InsertionMode::InFrameset;
                    return;
                }
                "html" => {
                    self.mode = if self.head.is_none() {
                        InsertionMode::BeforeHead
                    } else {
                        InsertionMode::AfterHead
                    };
                    return;
                }
                _ => {}
            }
            if last {
                break;
            }
        }
        self.mode = InsertionMode::InBody;
    }

    /// Generic raw-text / RCDATA element parsing: insert, switch the
    /// tokenizer, remember the mode, enter Text.
    fn parse_generic_text(
        &mut self,
        tag: &TagToken,
        tokenizer: &mut Tokenizer,
        state: State,
        errors: &mut ErrorSink,
    ) {
        self.insert_html_element(tag, errors);
        tokenizer.set_state(state);
        self.original_mode = self.mode;
        self.mode = InsertionMode::Text;
    }

    /// The "stop parsing" algorithm, minus script execution.
    fn stop_parsing(&mut self) {
        while self.open.pop().is_some() {}
        self.stopped = true;
    }

    fn record_head(&mut self, id: NodeId) {
        self.head = Some(id);
        self.doc.set_head(id);
    }

    fn record_body(&mut self, id: NodeId) {
        self.doc.set_body(id);
    }
}
