//! Element names and fixed values of the gLabels 4.0 document format

/// Root of a full label document
pub const DOCUMENT_ROOT: &str = "Glabels-document";
/// Root of an object fragment (clipboard transfer)
pub const FRAGMENT_ROOT: &str = "Glabels-objects";
/// Document schema version carried on the root element
pub const DOCUMENT_VERSION: &str = "4.0";

pub const TEMPLATE: &str = "Template";
pub const OBJECTS: &str = "Objects";
pub const MERGE: &str = "Merge";
pub const DATA: &str = "Data";

pub const OBJECT_BOX: &str = "Object-box";
pub const OBJECT_ELLIPSE: &str = "Object-ellipse";
pub const OBJECT_LINE: &str = "Object-line";
pub const OBJECT_IMAGE: &str = "Object-image";
pub const OBJECT_TEXT: &str = "Object-text";
pub const OBJECT_BARCODE: &str = "Object-barcode";
pub const PARAGRAPH: &str = "p";

pub const META: &str = "Meta";
pub const LABEL_RECTANGLE: &str = "Label-rectangle";
pub const LABEL_ROUND: &str = "Label-round";
pub const LABEL_ELLIPSE: &str = "Label-ellipse";
pub const MARKUP_MARGIN: &str = "Markup-margin";
pub const MARKUP_LINE: &str = "Markup-line";
pub const MARKUP_CIRCLE: &str = "Markup-circle";
pub const MARKUP_RECT: &str = "Markup-rect";
pub const LAYOUT: &str = "Layout";
