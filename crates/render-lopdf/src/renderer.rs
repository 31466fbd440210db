//! A rendering surface over `lopdf`.
//!
//! The renderer replays the engine's cursor from the op stream, buffers one
//! content stream per page, and assembles the page tree, shared resources,
//! and catalog when the document is exported.

use crate::images::{ColorModel, ImageCache, ImageFormat};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use vellum_layout::{Cursor, DrawOp, QUOTE_MARKER_WIDTH};
use vellum_render_core::{DocumentRenderer, RenderError};
use vellum_style::{PageMetrics, StyleTable, TextStyle};
use vellum_types::{Color, TokenKind};

/// Fill color of the blockquote indicator.
const QUOTE_MARKER_COLOR: Color = Color::gray(200);

/// Resource names for the embedded base-14 faces.
const BASE14_FONTS: &[(&str, &str)] = &[
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
    ("F4", "Helvetica-BoldOblique"),
    ("F5", "Courier"),
    ("F6", "Courier-Bold"),
    ("F7", "Courier-Oblique"),
    ("F8", "Courier-BoldOblique"),
];

fn font_resource(style: &TextStyle) -> &'static str {
    let postscript = style.family.postscript_name(style.weight, style.style);
    BASE14_FONTS
        .iter()
        .find(|(_, name)| *name == postscript)
        .map(|(resource, _)| *resource)
        .unwrap_or("F1")
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}

/// Text and fill state carried across ops within one page's content
/// stream. Reset on every page break.
#[derive(Clone, PartialEq)]
struct GraphicsState {
    font: &'static str,
    size: f32,
    fill: Option<Color>,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self { font: "", size: 0.0, fill: None }
    }
}

struct PageBuild {
    content: Content,
    annots: Vec<ObjectId>,
    state: GraphicsState,
}

impl Default for PageBuild {
    fn default() -> Self {
        Self {
            content: Content { operations: Vec::new() },
            annots: Vec::new(),
            state: GraphicsState::default(),
        }
    }
}

pub struct LopdfRenderer {
    page: PageMetrics,
    images: Arc<ImageCache>,
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: PageBuild,
    cursor: Cursor,
    style: TextStyle,
    xobjects: Vec<(String, ObjectId)>,
    xobject_names: HashMap<String, String>,
}

impl LopdfRenderer {
    pub fn new(page: PageMetrics, images: Arc<ImageCache>) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        Self {
            cursor: Cursor::at_origin(&page),
            style: *StyleTable::new().style_for(TokenKind::Paragraph),
            page,
            images,
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            current: PageBuild::default(),
            xobjects: Vec::new(),
            xobject_names: HashMap::new(),
        }
    }

    fn push_op(&mut self, operator: &str, operands: Vec<Object>) {
        self.current.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.current.state.fill != Some(color) {
            self.push_op(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            );
            self.current.state.fill = Some(color);
        }
    }

    fn set_font(&mut self, style: &TextStyle) {
        let resource = font_resource(style);
        if self.current.state.font != resource || self.current.state.size != style.size {
            self.push_op(
                "Tf",
                vec![Object::Name(resource.as_bytes().to_vec()), style.size.into()],
            );
            self.current.state.font = resource;
            self.current.state.size = style.size;
        }
    }

    fn fill_rect(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32) {
        self.set_fill_color(color);
        let pdf_y = self.page.size.height - (y + height);
        self.push_op("re", vec![x.into(), pdf_y.into(), width.into(), height.into()]);
        self.push_op("f", vec![]);
    }

    fn draw_word(&mut self, text: &str, width: f32, height: f32, filled: bool) {
        let style = self.style;
        if filled {
            self.fill_rect(style.fill, self.cursor.x, self.cursor.y, width, height);
        }

        self.push_op("BT", vec![]);
        self.set_font(&style);
        self.set_fill_color(style.color);
        // Center the baseline within the row the way a cell-based writer
        // would.
        let baseline_y = self.cursor.y + height / 2.0 + style.size * 0.35;
        let pdf_y = self.page.size.height - baseline_y;
        self.push_op("Td", vec![self.cursor.x.into(), pdf_y.into()]);
        self.push_op(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push_op("ET", vec![]);

        self.cursor.x += width;
    }

    fn draw_link_region(&mut self, width: f32, height: f32, target: &str) {
        let page_height = self.page.size.height;
        let rect = vec![
            self.cursor.x.into(),
            (page_height - (self.cursor.y + height)).into(),
            (self.cursor.x + width).into(),
            (page_height - self.cursor.y).into(),
        ];
        let action = dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(target),
        };
        let annot = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect,
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => action,
        };
        let annot_id = self.doc.add_object(annot);
        self.current.annots.push(annot_id);
    }

    fn draw_image(
        &mut self,
        source: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        let name = self.register_image(source)?;
        let pdf_y = self.page.size.height - (y + height);
        self.push_op("q", vec![]);
        self.push_op(
            "cm",
            vec![width.into(), 0.into(), 0.into(), height.into(), x.into(), pdf_y.into()],
        );
        self.push_op("Do", vec![Object::Name(name.into_bytes())]);
        self.push_op("Q", vec![]);
        Ok(())
    }

    /// Embed the image as an XObject once per source; later references
    /// reuse the same stream.
    fn register_image(&mut self, source: &str) -> Result<String, RenderError> {
        if let Some(name) = self.xobject_names.get(source) {
            return Ok(name.clone());
        }

        let data = self.images.load(source)?;
        let color_space = match data.color {
            ColorModel::Gray => "DeviceGray",
            ColorModel::Rgb => "DeviceRGB",
        };
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => data.width as i64,
            "Height" => data.height as i64,
            "BitsPerComponent" => 8,
            "ColorSpace" => color_space,
        };
        match data.format {
            ImageFormat::Jpeg => {
                dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
            }
            ImageFormat::Png => {
                // The IDAT payload is a zlib stream with per-row PNG
                // filters; FlateDecode undoes both given the predictor
                // parameters.
                dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
                dict.set(
                    "DecodeParms",
                    dictionary! {
                        "Predictor" => 15,
                        "Colors" => match data.color {
                            ColorModel::Gray => 1,
                            ColorModel::Rgb => 3,
                        },
                        "BitsPerComponent" => 8,
                        "Columns" => data.width as i64,
                    },
                );
            }
        }

        let stream_id = self.doc.add_object(Stream::new(dict, data.payload()?));
        let name = format!("Im{}", self.xobjects.len() + 1);
        self.xobjects.push((name.clone(), stream_id));
        self.xobject_names.insert(source.to_string(), name.clone());
        log::debug!("embedded image '{}' as {}", source, name);
        Ok(name)
    }

    fn finish_page(&mut self) -> Result<(), RenderError> {
        let build = std::mem::take(&mut self.current);
        let encoded = build.content.encode()?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page.size.width.into(),
                self.page.size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        if !build.annots.is_empty() {
            page_dict.set(
                "Annots",
                Object::Array(build.annots.into_iter().map(Object::Reference).collect()),
            );
        }

        let page_id = self.doc.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(())
    }

    fn build_resources(&self) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for (resource, postscript) in BASE14_FONTS {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => Object::Name(postscript.as_bytes().to_vec()),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(resource.as_bytes(), Object::Dictionary(font));
        }

        let mut resources = dictionary! { "Font" => font_dict };
        if !self.xobjects.is_empty() {
            let mut xobject_dict = Dictionary::new();
            for (name, id) in &self.xobjects {
                xobject_dict.set(name.as_bytes(), Object::Reference(*id));
            }
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }
        resources
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&mut self, ops: &[DrawOp]) -> Result<(), RenderError> {
        for op in ops {
            match op {
                DrawOp::SetStyle(style) => self.style = *style,
                DrawOp::DrawWord { text, width, height, filled } => {
                    self.draw_word(text, *width, *height, *filled);
                }
                DrawOp::DrawLinkRegion { width, height, target } => {
                    self.draw_link_region(*width, *height, target);
                }
                DrawOp::AdvanceLine(height) => {
                    self.cursor.x = self.page.margins.left;
                    self.cursor.y += height;
                }
                DrawOp::AdvancePage => {
                    self.finish_page()?;
                    self.cursor = Cursor::at_origin(&self.page);
                }
                DrawOp::DrawImage { source, x, y, width, height } => {
                    self.draw_image(source, *x, *y, *width, *height)?;
                }
                DrawOp::DrawBlockquoteMarker(height) => {
                    self.fill_rect(
                        QUOTE_MARKER_COLOR,
                        self.cursor.x,
                        self.cursor.y,
                        QUOTE_MARKER_WIDTH,
                        *height,
                    );
                    self.cursor.x += QUOTE_MARKER_WIDTH;
                }
            }
        }
        Ok(())
    }

    fn export_to(&mut self, mut writer: &mut dyn Write) -> Result<(), RenderError> {
        // The in-progress page is always emitted, so an empty document
        // still exports a single blank page.
        self.finish_page()?;

        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(self.build_resources()));

        let kids: Vec<Object> =
            self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let page_count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let creation_date = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        let info_id = self.doc.add_object(dictionary! {
            "Producer" => Object::string_literal("vellum"),
            "CreationDate" => Object::string_literal(creation_date),
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);

        self.doc.save_to(&mut writer)?;
        Ok(())
    }
}
