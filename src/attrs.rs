//! Legacy attribute-naming compatibility for SVG.
//!
//! React-style JSX spells SVG attributes in camelCase; the wire format the
//! renderer sets on the element uses the hyphenated or namespace-qualified
//! spelling. This closed table maps the former to the latter for
//! non-component elements.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// camelCase -> canonical SVG attribute names.
    pub static ref SVG_COMPAT_ATTRS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("accentHeight", "accent-height");
        m.insert("alignmentBaseline", "alignment-baseline");
        m.insert("arabicForm", "arabic-form");
        m.insert("baselineShift", "baseline-shift");
        m.insert("capHeight", "cap-height");
        m.insert("clipPath", "clip-path");
        m.insert("clipRule", "clip-rule");
        m.insert("colorInterpolation", "color-interpolation");
        m.insert("colorInterpolationFilters", "color-interpolation-filters");
        m.insert("colorProfile", "color-profile");
        m.insert("colorRendering", "color-rendering");
        m.insert("dominantBaseline", "dominant-baseline");
        m.insert("enableBackground", "enable-background");
        m.insert("fillOpacity", "fill-opacity");
        m.insert("fillRule", "fill-rule");
        m.insert("floodColor", "flood-color");
        m.insert("floodOpacity", "flood-opacity");
        m.insert("fontFamily", "font-family");
        m.insert("fontSize", "font-size");
        m.insert("fontSizeAdjust", "font-size-adjust");
        m.insert("fontStretch", "font-stretch");
        m.insert("fontStyle", "font-style");
        m.insert("fontVariant", "font-variant");
        m.insert("fontWeight", "font-weight");
        m.insert("glyphName", "glyph-name");
        m.insert("glyphOrientationHorizontal", "glyph-orientation-horizontal");
        m.insert("glyphOrientationVertical", "glyph-orientation-vertical");
        m.insert("horizAdvX", "horiz-adv-x");
        m.insert("horizOriginX", "horiz-origin-x");
        m.insert("imageRendering", "image-rendering");
        m.insert("letterSpacing", "letter-spacing");
        m.insert("lightingColor", "lighting-color");
        m.insert("markerEnd", "marker-end");
        m.insert("markerMid", "marker-mid");
        m.insert("markerStart", "marker-start");
        m.insert("overlinePosition", "overline-position");
        m.insert("overlineThickness", "overline-thickness");
        m.insert("paintOrder", "paint-order");
        m.insert("panose1", "panose-1");
        m.insert("pointerEvents", "pointer-events");
        m.insert("renderingIntent", "rendering-intent");
        m.insert("shapeRendering", "shape-rendering");
        m.insert("stopColor", "stop-color");
        m.insert("stopOpacity", "stop-opacity");
        m.insert("strikethroughPosition", "strikethrough-position");
        m.insert("strikethroughThickness", "strikethrough-thickness");
        m.insert("strokeDasharray", "stroke-dasharray");
        m.insert("strokeDashoffset", "stroke-dashoffset");
        m.insert("strokeLinecap", "stroke-linecap");
        m.insert("strokeLinejoin", "stroke-linejoin");
        m.insert("strokeMiterlimit", "stroke-miterlimit");
        m.insert("strokeOpacity", "stroke-opacity");
        m.insert("strokeWidth", "stroke-width");
        m.insert("textAnchor", "text-anchor");
        m.insert("textDecoration", "text-decoration");
        m.insert("textRendering", "text-rendering");
        m.insert("underlinePosition", "underline-position");
        m.insert("underlineThickness", "underline-thickness");
        m.insert("unicodeBidi", "unicode-bidi");
        m.insert("unicodeRange", "unicode-range");
        m.insert("unitsPerEm", "units-per-em");
        m.insert("vAlphabetic", "v-alphabetic");
        m.insert("vHanging", "v-hanging");
        m.insert("vIdeographic", "v-ideographic");
        m.insert("vMathematical", "v-mathematical");
        m.insert("vectorEffect", "vector-effect");
        m.insert("vertAdvY", "vert-adv-y");
        m.insert("vertOriginX", "vert-origin-x");
        m.insert("vertOriginY", "vert-origin-y");
        m.insert("wordSpacing", "word-spacing");
        m.insert("writingMode", "writing-mode");
        m.insert("xHeight", "x-height");
        m.insert("xlinkActuate", "xlink:actuate");
        m.insert("xlinkArcrole", "xlink:arcrole");
        m.insert("xlinkHref", "xlink:href");
        m.insert("xlinkRole", "xlink:role");
        m.insert("xlinkShow", "xlink:show");
        m.insert("xlinkTitle", "xlink:title");
        m.insert("xlinkType", "xlink:type");
        m.insert("xmlBase", "xml:base");
        m.insert("xmlLang", "xml:lang");
        m.insert("xmlSpace", "xml:space");
        m
    };
}
