//! Foreign content: the MathML/SVG token rules and the attribute/tag-name
//! adjustment tables.

use super::{Outcome, TreeBuilder};
use crate::dom::Namespace;
use crate::error::{ErrorSink, ParseErrorCode};
use crate::token::{TagToken, Token};
use crate::tokenizer::Tokenizer;

/// HTML start tags that break out of foreign content unconditionally.
const BREAKOUT_TAGS: &[&str] = &[
    "b", "big", "blockquote", "body", "br", "center", "code", "dd", "div", "dl", "dt", "em",
    "embed", "h1", "h2", "h3", "h4", "h5", "h6", "head", "hr", "i", "img", "li", "listing",
    "menu", "meta", "nobr", "ol", "p", "pre", "ruby", "s", "small", "span", "strong", "strike",
    "sub", "sup", "table", "tt", "u", "ul", "var",
];

impl TreeBuilder {
    pub(super) fn process_foreign(
        &mut self,
        token: Token,
        _tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Character { scalar: '\0' } => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.insert_character('\u{FFFD}');
                Outcome::Done
            }
            Token::Character { scalar } => {
                self.insert_character(scalar);
                if !super::rules::is_ws_char(scalar) {
                    self.frameset_ok = false;
                }
                Outcome::Done
            }
            Token::Comment { data } => {
                self.insert_comment(data, None);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(tag) if is_breakout_start_tag(&tag) => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                // Pop foreign elements until an integration point or HTML
                // element is current, then retry under HTML rules.
                while let Some(current) = self.current_node() {
                    let html = self
                        .doc
                        .elem(current)
                        .is_some_and(|e| e.namespace == Namespace::Html);
                    if html
                        || self.is_mathml_text_integration_point(current)
                        || self.is_html_integration_point(current)
                    {
                        break;
                    }
                    self.open.pop();
                }
                Outcome::Reprocess(Token::StartTag(tag))
            }
            Token::StartTag(tag) => {
                let namespace = self
                    .adjusted_current_node()
                    .and_then(|id| self.doc.elem(id))
                    .map_or(Namespace::Html, |e| e.namespace);
                self.insert_foreign_for_token_in(tag, namespace);
                Outcome::Done
            }
            Token::EndTag(tag) => self.foreign_end_tag(tag, errors),
            Token::Eof => {
                debug_assert!(false, "EOF always dispatches to HTML rules");
                Outcome::Done
            }
        }
    }

    /// Insert a `math`/`svg` start tag from InBody, entering the namespace.
    pub(super) fn insert_foreign_for_token(&mut self, tag: TagToken, namespace: Namespace) {
        self.insert_foreign_for_token_in(tag, namespace);
    }

    /// Foreign attributes (xlink:/xml:/xmlns) keep their prefixed names as
    /// written; only the SVG/MathML case fixups rewrite anything.
    fn insert_foreign_for_token_in(&mut self, mut tag: TagToken, namespace: Namespace) {
        match namespace {
            Namespace::Svg => {
                adjust_svg_tag_name(&mut tag);
                adjust_svg_attributes(&mut tag);
            }
            Namespace::MathMl => adjust_mathml_attributes(&mut tag),
            _ => {}
        }
        let self_closing = tag.self_closing;
        let point = self.appropriate_insertion_point(None);
        let id = self.create_element_for_token(&tag, namespace);
        self.insert_at(point, id);
        self.open.push(id);
        if self_closing {
            // Acknowledged: foreign elements honor self-closing syntax.
            // An SVG <script/> would execute here if scripts ran.
            self.open.pop();
        }
    }

    fn foreign_end_tag(&mut self, tag: TagToken, errors: &mut ErrorSink) -> Outcome {
        // SVG script gets no special handling: no scripts execute.
        if self
            .current_node()
            .and_then(|id| self.doc.elem(id))
            .is_some_and(|e| e.local.to_ascii_lowercase() != tag.name)
        {
            self.err(errors, ParseErrorCode::UnexpectedEndTag);
        }
        let mut index = self.open.len();
        while index > 0 {
            index -= 1;
            let Some(node) = self.open.get(index) else {
                break;
            };
            let Some(elem) = self.doc.elem(node) else {
                break;
            };
            if elem.namespace == Namespace::Html {
                // Reached HTML content: process under the current mode.
                return Outcome::Reprocess(Token::EndTag(tag));
            }
            if elem.local.to_ascii_lowercase() == tag.name {
                self.open.pop_until_node(node);
                return Outcome::Done;
            }
            if index == 0 {
                return Outcome::Done;
            }
        }
        Outcome::Done
    }
}

fn is_breakout_start_tag(tag: &TagToken) -> bool {
    if BREAKOUT_TAGS.contains(&tag.name.as_str()) {
        return true;
    }
    tag.name == "font"
        && tag
            .attrs
            .iter()
            .any(|a| matches!(a.name.as_str(), "color" | "face" | "size"))
}

/// SVG tag names that keep mixed case in the DOM.
fn adjust_svg_tag_name(tag: &mut TagToken) {
    const ADJUSTMENTS: &[(&str, &str)] = &[
        ("altglyph", "altGlyph"),
        ("altglyphdef", "altGlyphDef"),
        ("altglyphitem", "altGlyphItem"),
        ("animatecolor", "animateColor"),
        ("animatemotion", "animateMotion"),
        ("animatetransform", "animateTransform"),
        ("clippath", "clipPath"),
        ("feblend", "feBlend"),
        ("fecolormatrix", "feColorMatrix"),
        ("fecomponenttransfer", "feComponentTransfer"),
        ("fecomposite", "feComposite"),
        ("feconvolvematrix", "feConvolveMatrix"),
        ("fediffuselighting", "feDiffuseLighting"),
        ("fedisplacementmap", "feDisplacementMap"),
        ("fedistantlight", "feDistantLight"),
        ("fedropshadow", "feDropShadow"),
        ("feflood", "feFlood"),
        ("fefunca", "feFuncA"),
        ("fefuncb", "feFuncB"),
        ("fefuncg", "feFuncG"),
        ("fefuncr", "feFuncR"),
        ("fegaussianblur", "feGaussianBlur"),
        ("feimage", "feImage"),
        ("femerge", "feMerge"),
        ("femergenode", "feMergeNode"),
        ("femorphology", "feMorphology"),
        ("feoffset", "feOffset"),
        ("fepointlight", "fePointLight"),
        ("fespecularlighting", "feSpecularLighting"),
        ("fespotlight", "feSpotLight"),
        ("fetile", "feTile"),
        ("feturbulence", "feTurbulence"),
        ("foreignobject", "foreignObject"),
        ("glyphref", "glyphRef"),
        ("lineargradient", "linearGradient"),
        ("radialgradient", "radialGradient"),
        ("textpath", "textPath"),
    ];
    if let Ok(found) = ADJUSTMENTS.binary_search_by(|(from, _)| (*from).cmp(tag.name.as_str())) {
        tag.name = ADJUSTMENTS[found].1.to_string();
    }
}

fn adjust_svg_attributes(tag: &mut TagToken) {
    const ADJUSTMENTS: &[(&str, &str)] = &[
        ("attributename", "attributeName"),
        ("attributetype", "attributeType"),
        ("basefrequency", "baseFrequency"),
        ("baseprofile", "baseProfile"),
        ("calcmode", "calcMode"),
        ("clippathunits", "clipPathUnits"),
        ("diffuseconstant", "diffuseConstant"),
        ("edgemode", "edgeMode"),
        ("filterunits", "filterUnits"),
        ("glyphref", "glyphRef"),
        ("gradienttransform", "gradientTransform"),
        ("gradientunits", "gradientUnits"),
        ("kernelmatrix", "kernelMatrix"),
        ("kernelunitlength", "kernelUnitLength"),
        ("keypoints", "keyPoints"),
        ("keysplines", "keySplines"),
        ("keytimes", "keyTimes"),
        ("lengthadjust", "lengthAdjust"),
        ("limitingconeangle", "limitingConeAngle"),
        ("markerheight", "markerHeight"),
        ("markerunits", "markerUnits"),
        ("markerwidth", "markerWidth"),
        ("maskcontentunits", "maskContentUnits"),
        ("maskunits", "maskUnits"),
        ("numoctaves", "numOctaves"),
        ("pathlength", "pathLength"),
        ("patterncontentunits", "patternContentUnits"),
        ("patterntransform", "patternTransform"),
        ("patternunits", "patternUnits"),
        ("pointsatx", "pointsAtX"),
        ("pointsaty", "pointsAtY"),
        ("pointsatz", "pointsAtZ"),
        ("preservealpha", "preserveAlpha"),
        ("preserveaspectratio", "preserveAspectRatio"),
        ("primitiveunits", "primitiveUnits"),
        ("refx", "refX"),
        ("refy", "refY"),
        ("repeatcount", "repeatCount"),
        ("repeatdur", "repeatDur"),
        ("requiredextensions", "requiredExtensions"),
        ("requiredfeatures", "requiredFeatures"),
        ("specularconstant", "specularConstant"),
        ("specularexponent", "specularExponent"),
        ("spreadmethod", "spreadMethod"),
        ("startoffset", "startOffset"),
        ("stddeviation", "stdDeviation"),
        ("stitchtiles", "stitchTiles"),
        ("surfacescale", "surfaceScale"),
        ("systemlanguage", "systemLanguage"),
        ("tablevalues", "tableValues"),
        ("targetx", "targetX"),
        ("targety", "targetY"),
        ("textlength", "textLength"),
        ("viewbox", "viewBox"),
        ("viewtarget", "viewTarget"),
        ("xchannelselector", "xChannelSelector"),
        ("ychannelselector", "yChannelSelector"),
        ("zoomandpan", "zoomAndPan"),
    ];
    for attr in &mut tag.attrs {
        if let Ok(found) =
            ADJUSTMENTS.binary_search_by(|(from, _)| (*from).cmp(attr.name.as_str()))
        {
            attr.name = ADJUSTMENTS[found].1.to_string();
        }
    }
}

fn adjust_mathml_attributes(tag: &mut TagToken) {
    for attr in &mut tag.attrs {
        if attr.name == "definitionurl" {
            attr.name = "definitionURL".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Attribute;

    fn tag_with(name: &str, attrs: &[(&str, &str)]) -> TagToken {
        TagToken {
            name: name.to_string(),
            self_closing: false,
            attrs: attrs
                .iter()
                .map(|(n, v)| Attribute {
                    name: n.to_string(),
                    value: v.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn svg_tag_names_restore_mixed_case() {
        let mut tag = tag_with("foreignobject", &[]);
        adjust_svg_tag_name(&mut tag);
        assert_eq!(tag.name, "foreignObject");

        let mut tag = tag_with("fegaussianblur", &[]);
        adjust_svg_tag_name(&mut tag);
        assert_eq!(tag.name, "feGaussianBlur");

        let mut tag = tag_with("rect", &[]);
        adjust_svg_tag_name(&mut tag);
        assert_eq!(tag.name, "rect");
    }

    #[test]
    fn svg_attribute_names_restore_mixed_case() {
        let mut tag = tag_with("svg", &[("viewbox", "0 0 1 1"), ("fill", "red")]);
        adjust_svg_attributes(&mut tag);
        assert_eq!(tag.attrs[0].name, "viewBox");
        assert_eq!(tag.attrs[1].name, "fill");
    }

    #[test]
    fn mathml_definitionurl_is_adjusted() {
        let mut tag = tag_with("math", &[("definitionurl", "x")]);
        adjust_mathml_attributes(&mut tag);
        assert_eq!(tag.attrs[0].name, "definitionURL");
    }

    #[test]
    fn font_breaks_out_only_with_styling_attributes() {
        assert!(is_breakout_start_tag(&tag_with("font", &[("color", "red")])));
        assert!(!is_breakout_start_tag(&tag_with("font", &[("id", "f")])));
        assert!(is_breakout_start_tag(&tag_with("p", &[])));
        assert!(!is_breakout_start_tag(&tag_with("circle", &[])));
    }

    #[test]
    fn svg_adjustment_tables_are_sorted_for_binary_search() {
        let mut tag = tag_with("altglyph", &[]);
        adjust_svg_tag_name(&mut tag);
        assert_eq!(tag.name, "altGlyph");
        let mut tag = tag_with("zoomandpan-element", &[]);
        adjust_svg_tag_name(&mut tag);
        assert_eq!(tag.name, "zoomandpan-element");
    }
}
