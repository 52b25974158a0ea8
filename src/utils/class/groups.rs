//! Default utility-class ruleset.
//!
//! Three tables drive the merger:
//!
//! - [`CLASS_GROUPS`]: which class names belong to which group. Groups are
//!   tried in table order, so a narrow group (`font-size`) must come before a
//!   catch-all group sharing its prefix (`text-color`).
//! - [`CONFLICTS`]: groups a class overrides in addition to its own
//!   (`p-4` also overrides `px-2`).
//! - [`POSTFIX_CONFLICTS`]: extra overrides when the class carries a postfix
//!   modifier (`text-lg/7` also sets the line height).

use super::validators::Value::{self, *};

/// How a class name is matched to a group.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// The whole class name (`block`, `italic`, `rounded`).
    Exact(&'static str),
    /// `{prefix}-{value}` where the value satisfies one of the validators.
    Prefix(&'static str, &'static [Value]),
}

/// A named set of mutually exclusive utility classes.
#[derive(Debug, Clone, Copy)]
pub struct ClassGroup {
    pub id: &'static str,
    pub patterns: &'static [Pattern],
}

use Pattern::{Exact, Prefix};

const fn group(id: &'static str, patterns: &'static [Pattern]) -> ClassGroup {
    ClassGroup { id, patterns }
}

const SPACING: &[Value] = &[Length, Arbitrary];
const MARGIN: &[Value] = &[Length, Keyword(&["auto"]), Arbitrary];
const INSET: &[Value] = &[Length, Keyword(&["auto"]), Arbitrary];
const WIDTH: &[Value] = &[
    Length,
    Keyword(&["auto", "min", "max", "fit", "svw", "lvw", "dvw"]),
    Arbitrary,
];
const HEIGHT: &[Value] = &[
    Length,
    Keyword(&["auto", "min", "max", "fit", "svh", "lvh", "dvh"]),
    Arbitrary,
];
const MAX_WIDTH: &[Value] = &[
    Length,
    Tshirt,
    Keyword(&["none", "min", "max", "fit", "prose", "screen-sm", "screen-md", "screen-lg", "screen-xl", "screen-2xl"]),
    Arbitrary,
];
const RADIUS: &[Value] = &[Tshirt, Keyword(&["none", "full"]), Arbitrary];
const BORDER_WIDTH: &[Value] = &[Number, ArbitraryLength];
const OVERFLOW: &[Value] = &[Keyword(&["auto", "hidden", "clip", "visible", "scroll"])];
const ANY: &[Value] = &[Any];

pub const CLASS_GROUPS: &[ClassGroup] = &[
    // Layout
    group("container", &[Exact("container")]),
    group(
        "display",
        &[
            Exact("block"),
            Exact("inline-block"),
            Exact("inline"),
            Exact("flex"),
            Exact("inline-flex"),
            Exact("table"),
            Exact("inline-table"),
            Exact("table-row"),
            Exact("table-cell"),
            Exact("flow-root"),
            Exact("grid"),
            Exact("inline-grid"),
            Exact("contents"),
            Exact("list-item"),
            Exact("hidden"),
        ],
    ),
    group(
        "position",
        &[
            Exact("static"),
            Exact("fixed"),
            Exact("absolute"),
            Exact("relative"),
            Exact("sticky"),
        ],
    ),
    group(
        "visibility",
        &[Exact("visible"), Exact("invisible"), Exact("collapse")],
    ),
    group("sr", &[Exact("sr-only"), Exact("not-sr-only")]),
    group("isolation", &[Exact("isolate"), Exact("isolation-auto")]),
    group(
        "float",
        &[Prefix("float", &[Keyword(&["right", "left", "none", "start", "end"])])],
    ),
    group(
        "clear",
        &[Prefix("clear", &[Keyword(&["left", "right", "both", "none", "start", "end"])])],
    ),
    group(
        "object-fit",
        &[Prefix("object", &[Keyword(&["contain", "cover", "fill", "none", "scale-down"])])],
    ),
    group("overflow", &[Prefix("overflow", OVERFLOW)]),
    group("overflow-x", &[Prefix("overflow-x", OVERFLOW)]),
    group("overflow-y", &[Prefix("overflow-y", OVERFLOW)]),
    group("inset", &[Prefix("inset", INSET)]),
    group("inset-x", &[Prefix("inset-x", INSET)]),
    group("inset-y", &[Prefix("inset-y", INSET)]),
    group("start", &[Prefix("start", INSET)]),
    group("end", &[Prefix("end", INSET)]),
    group("top", &[Prefix("top", INSET)]),
    group("right", &[Prefix("right", INSET)]),
    group("bottom", &[Prefix("bottom", INSET)]),
    group("left", &[Prefix("left", INSET)]),
    group(
        "z",
        &[Prefix("z", &[Integer, Keyword(&["auto"]), Arbitrary])],
    ),
    group(
        "aspect",
        &[Prefix("aspect", &[Keyword(&["auto", "square", "video"]), Arbitrary])],
    ),
    // Flexbox & grid
    group("basis", &[Prefix("basis", &[Length, Keyword(&["auto"]), Arbitrary])]),
    group(
        "flex-direction",
        &[
            Exact("flex-row"),
            Exact("flex-row-reverse"),
            Exact("flex-col"),
            Exact("flex-col-reverse"),
        ],
    ),
    group(
        "flex-wrap",
        &[
            Exact("flex-wrap"),
            Exact("flex-wrap-reverse"),
            Exact("flex-nowrap"),
        ],
    ),
    group(
        "flex",
        &[Prefix("flex", &[Number, Keyword(&["auto", "initial", "none"]), Arbitrary])],
    ),
    group("grow", &[Exact("grow"), Prefix("grow", &[Number, Arbitrary])]),
    group("shrink", &[Exact("shrink"), Prefix("shrink", &[Number, Arbitrary])]),
    group(
        "order",
        &[Prefix("order", &[Integer, Keyword(&["first", "last", "none"]), Arbitrary])],
    ),
    group(
        "grid-cols",
        &[Prefix("grid-cols", &[Integer, Keyword(&["none", "subgrid"]), Arbitrary])],
    ),
    group(
        "grid-rows",
        &[Prefix("grid-rows", &[Integer, Keyword(&["none", "subgrid"]), Arbitrary])],
    ),
    group(
        "col-span",
        &[Exact("col-auto"), Prefix("col-span", &[Integer, Keyword(&["full"]), Arbitrary])],
    ),
    group("gap", &[Prefix("gap", SPACING)]),
    group("gap-x", &[Prefix("gap-x", SPACING)]),
    group("gap-y", &[Prefix("gap-y", SPACING)]),
    group(
        "justify-content",
        &[Prefix(
            "justify",
            &[Keyword(&["normal", "start", "end", "center", "between", "around", "evenly", "stretch"])],
        )],
    ),
    group(
        "align-items",
        &[Prefix("items", &[Keyword(&["start", "end", "center", "baseline", "stretch"])])],
    ),
    group(
        "align-self",
        &[Prefix("self", &[Keyword(&["auto", "start", "end", "center", "stretch", "baseline"])])],
    ),
    // Spacing
    group("p", &[Prefix("p", SPACING)]),
    group("px", &[Prefix("px", SPACING)]),
    group("py", &[Prefix("py", SPACING)]),
    group("ps", &[Prefix("ps", SPACING)]),
    group("pe", &[Prefix("pe", SPACING)]),
    group("pt", &[Prefix("pt", SPACING)]),
    group("pr", &[Prefix("pr", SPACING)]),
    group("pb", &[Prefix("pb", SPACING)]),
    group("pl", &[Prefix("pl", SPACING)]),
    group("m", &[Prefix("m", MARGIN)]),
    group("mx", &[Prefix("mx", MARGIN)]),
    group("my", &[Prefix("my", MARGIN)]),
    group("ms", &[Prefix("ms", MARGIN)]),
    group("me", &[Prefix("me", MARGIN)]),
    group("mt", &[Prefix("mt", MARGIN)]),
    group("mr", &[Prefix("mr", MARGIN)]),
    group("mb", &[Prefix("mb", MARGIN)]),
    group("ml", &[Prefix("ml", MARGIN)]),
    group("space-x", &[Prefix("space-x", SPACING)]),
    group("space-y", &[Prefix("space-y", SPACING)]),
    // Sizing
    group("size", &[Prefix("size", WIDTH)]),
    group("w", &[Prefix("w", WIDTH)]),
    group("min-w", &[Prefix("min-w", WIDTH)]),
    group("max-w", &[Prefix("max-w", MAX_WIDTH)]),
    group("h", &[Prefix("h", HEIGHT)]),
    group("min-h", &[Prefix("min-h", HEIGHT)]),
    group("max-h", &[Prefix("max-h", HEIGHT)]),
    // Typography
    group(
        "font-size",
        &[Prefix("text", &[Tshirt, Keyword(&["base"]), ArbitraryLength])],
    ),
    group(
        "font-smoothing",
        &[Exact("antialiased"), Exact("subpixel-antialiased")],
    ),
    group("font-style", &[Exact("italic"), Exact("not-italic")]),
    group(
        "font-weight",
        &[Prefix(
            "font",
            &[
                Keyword(&[
                    "thin",
                    "extralight",
                    "light",
                    "normal",
                    "medium",
                    "semibold",
                    "bold",
                    "extrabold",
                    "black",
                ]),
                ArbitraryNumber,
            ],
        )],
    ),
    group("font-family", &[Prefix("font", ANY)]),
    group(
        "tracking",
        &[Prefix(
            "tracking",
            &[Keyword(&["tighter", "tight", "normal", "wide", "wider", "widest"]), Arbitrary],
        )],
    ),
    group(
        "leading",
        &[Prefix(
            "leading",
            &[Keyword(&["none", "tight", "snug", "normal", "relaxed", "loose"]), Length, Arbitrary],
        )],
    ),
    group(
        "list-style-type",
        &[Prefix("list", &[Keyword(&["none", "disc", "decimal"]), Arbitrary])],
    ),
    group(
        "text-alignment",
        &[Prefix("text", &[Keyword(&["left", "center", "right", "justify", "start", "end"])])],
    ),
    group("text-color", &[Prefix("text", ANY)]),
    group(
        "text-decoration",
        &[
            Exact("underline"),
            Exact("overline"),
            Exact("line-through"),
            Exact("no-underline"),
        ],
    ),
    group(
        "text-decoration-style",
        &[Prefix("decoration", &[Keyword(&["solid", "double", "dotted", "dashed", "wavy"])])],
    ),
    group(
        "text-decoration-thickness",
        &[Prefix(
            "decoration",
            &[Keyword(&["auto", "from-font"]), Number, ArbitraryLength],
        )],
    ),
    group("text-decoration-color", &[Prefix("decoration", ANY)]),
    group(
        "underline-offset",
        &[Prefix("underline-offset", &[Keyword(&["auto"]), Number, ArbitraryLength])],
    ),
    group(
        "text-transform",
        &[
            Exact("uppercase"),
            Exact("lowercase"),
            Exact("capitalize"),
            Exact("normal-case"),
        ],
    ),
    group(
        "text-overflow",
        &[Exact("truncate"), Exact("text-ellipsis"), Exact("text-clip")],
    ),
    group(
        "whitespace",
        &[Prefix(
            "whitespace",
            &[Keyword(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"])],
        )],
    ),
    group(
        "break",
        &[Prefix("break", &[Keyword(&["normal", "words", "all", "keep"])])],
    ),
    // Backgrounds
    group(
        "bg-attachment",
        &[Prefix("bg", &[Keyword(&["fixed", "local", "scroll"])])],
    ),
    group(
        "bg-repeat",
        &[
            Exact("bg-repeat"),
            Exact("bg-no-repeat"),
            Prefix("bg-repeat", &[Keyword(&["x", "y", "round", "space"])]),
        ],
    ),
    group(
        "bg-position",
        &[Prefix(
            "bg",
            &[Keyword(&[
                "bottom",
                "center",
                "left",
                "left-bottom",
                "left-top",
                "right",
                "right-bottom",
                "right-top",
                "top",
            ])],
        )],
    ),
    group(
        "bg-size",
        &[Prefix("bg", &[Keyword(&["auto", "cover", "contain"]), ArbitraryLength])],
    ),
    group(
        "bg-image",
        &[
            Prefix("bg", &[Keyword(&["none"]), ArbitraryImage]),
            Prefix("bg-gradient-to", &[Keyword(&["t", "tr", "r", "br", "b", "bl", "l", "tl"])]),
        ],
    ),
    group("bg-color", &[Prefix("bg", ANY)]),
    // Borders
    group(
        "rounded",
        &[Exact("rounded"), Prefix("rounded", RADIUS)],
    ),
    group("rounded-s", &[Exact("rounded-s"), Prefix("rounded-s", RADIUS)]),
    group("rounded-e", &[Exact("rounded-e"), Prefix("rounded-e", RADIUS)]),
    group("rounded-t", &[Exact("rounded-t"), Prefix("rounded-t", RADIUS)]),
    group("rounded-r", &[Exact("rounded-r"), Prefix("rounded-r", RADIUS)]),
    group("rounded-b", &[Exact("rounded-b"), Prefix("rounded-b", RADIUS)]),
    group("rounded-l", &[Exact("rounded-l"), Prefix("rounded-l", RADIUS)]),
    group("rounded-tl", &[Exact("rounded-tl"), Prefix("rounded-tl", RADIUS)]),
    group("rounded-tr", &[Exact("rounded-tr"), Prefix("rounded-tr", RADIUS)]),
    group("rounded-br", &[Exact("rounded-br"), Prefix("rounded-br", RADIUS)]),
    group("rounded-bl", &[Exact("rounded-bl"), Prefix("rounded-bl", RADIUS)]),
    group("border-w", &[Exact("border"), Prefix("border", BORDER_WIDTH)]),
    group("border-w-x", &[Exact("border-x"), Prefix("border-x", BORDER_WIDTH)]),
    group("border-w-y", &[Exact("border-y"), Prefix("border-y", BORDER_WIDTH)]),
    group("border-w-s", &[Exact("border-s"), Prefix("border-s", BORDER_WIDTH)]),
    group("border-w-e", &[Exact("border-e"), Prefix("border-e", BORDER_WIDTH)]),
    group("border-w-t", &[Exact("border-t"), Prefix("border-t", BORDER_WIDTH)]),
    group("border-w-r", &[Exact("border-r"), Prefix("border-r", BORDER_WIDTH)]),
    group("border-w-b", &[Exact("border-b"), Prefix("border-b", BORDER_WIDTH)]),
    group("border-w-l", &[Exact("border-l"), Prefix("border-l", BORDER_WIDTH)]),
    group(
        "border-style",
        &[Prefix("border", &[Keyword(&["solid", "dashed", "dotted", "double", "hidden", "none"])])],
    ),
    group("border-color", &[Prefix("border", ANY)]),
    group("border-color-x", &[Prefix("border-x", ANY)]),
    group("border-color-y", &[Prefix("border-y", ANY)]),
    group("border-color-s", &[Prefix("border-s", ANY)]),
    group("border-color-e", &[Prefix("border-e", ANY)]),
    group("border-color-t", &[Prefix("border-t", ANY)]),
    group("border-color-r", &[Prefix("border-r", ANY)]),
    group("border-color-b", &[Prefix("border-b", ANY)]),
    group("border-color-l", &[Prefix("border-l", ANY)]),
    group("ring-w", &[Exact("ring"), Prefix("ring", &[Number, ArbitraryLength])]),
    group("ring-offset-w", &[Prefix("ring-offset", &[Number, ArbitraryLength])]),
    group("ring-offset-color", &[Prefix("ring-offset", ANY)]),
    group("ring-color", &[Prefix("ring", ANY)]),
    // Effects
    group(
        "shadow",
        &[
            Exact("shadow"),
            Prefix("shadow", &[Tshirt, Keyword(&["inner", "none"]), Arbitrary]),
        ],
    ),
    group("shadow-color", &[Prefix("shadow", ANY)]),
    group("opacity", &[Prefix("opacity", &[Number, Arbitrary])]),
    // Transitions
    group(
        "transition",
        &[
            Exact("transition"),
            Prefix(
                "transition",
                &[Keyword(&["none", "all", "colors", "opacity", "shadow", "transform"]), Arbitrary],
            ),
        ],
    ),
    group("duration", &[Prefix("duration", &[Number, Arbitrary])]),
    group(
        "ease",
        &[Prefix("ease", &[Keyword(&["linear", "in", "out", "in-out"]), Arbitrary])],
    ),
    group("delay", &[Prefix("delay", &[Number, Arbitrary])]),
    // Interactivity
    group("cursor", &[Prefix("cursor", ANY)]),
    group(
        "pointer-events",
        &[Prefix("pointer-events", &[Keyword(&["none", "auto"])])],
    ),
    group(
        "select",
        &[Prefix("select", &[Keyword(&["none", "text", "all", "auto"])])],
    ),
    // SVG
    group("fill", &[Prefix("fill", ANY)]),
    group("stroke-w", &[Prefix("stroke", &[Number, ArbitraryLength])]),
    group("stroke", &[Prefix("stroke", ANY)]),
];

pub const CONFLICTS: &[(&str, &[&str])] = &[
    ("overflow", &["overflow-x", "overflow-y"]),
    (
        "inset",
        &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
    ),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("flex", &["basis", "grow", "shrink"]),
    ("gap", &["gap-x", "gap-y"]),
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    (
        "rounded",
        &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
];

pub const POSTFIX_CONFLICTS: &[(&str, &[&str])] = &[("font-size", &["leading"])];
