//! Meal ticket image rendering.
//!
//! Tickets use a fixed layout: a coloured header band, a text column on the left with the
//! student name, date, meal and caffeine, and the profile photo on the right.

use std::io::Cursor;

use ab_glyph::{FontVec, PxScale};
use chrono::NaiveDate;
use image::{imageops::FilterType, DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_text_mut},
    rect::Rect,
};

use crate::server::{
    error::{config::ConfigError, Error},
    model::meal::ResolvedMeal,
    util::time::display_date,
};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;
const HEADER_HEIGHT: u32 = 24;

const TEXT_X: i32 = 30;
const NAME_Y: i32 = 60;
const DETAIL_Y: i32 = 130;
const DETAIL_SPACING: i32 = 50;
const NAME_SCALE: f32 = 36.0;
const DETAIL_SCALE: f32 = 28.0;

const PHOTO_X: u32 = 470;
const PHOTO_Y: u32 = 40;
const PHOTO_WIDTH: u32 = 300;
const PHOTO_HEIGHT: u32 = 340;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const HEADER: Rgba<u8> = Rgba([46, 125, 50, 255]);
const TEXT: Rgba<u8> = Rgba([20, 20, 20, 255]);
const PLACEHOLDER: Rgba<u8> = Rgba([200, 200, 200, 255]);
const PLACEHOLDER_TEXT: Rgba<u8> = Rgba([90, 90, 90, 255]);

/// Text printed on a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDetails {
    pub name: String,
    pub date: String,
    pub meal: String,
    pub caffeine: String,
    /// Where the meal came from, e.g. the weekly plan
    pub basis: String,
}

impl TicketDetails {
    pub fn new(name: impl Into<String>, date: NaiveDate, meal: &ResolvedMeal) -> Self {
        Self {
            name: name.into(),
            date: display_date(date),
            meal: meal.meal_label(),
            caffeine: meal.caffeine_label(),
            basis: meal.source.describe().to_string(),
        }
    }

    /// Caption sent along with the ticket image.
    pub fn caption(&self) -> String {
        format!(
            "Meal ticket for {}\nDate: {}\nMeal: {}\nCaffeine: {}\n({})",
            self.name, self.date, self.meal, self.caffeine, self.basis
        )
    }
}

pub struct TicketRenderer {
    font: Option<FontVec>,
}

impl TicketRenderer {
    /// Creates a renderer that draws text with `font`, or omits text when `None`.
    pub fn new(font: Option<FontVec>) -> Self {
        Self { font }
    }

    /// Whether tickets carry the name and meal details as text.
    pub fn draws_text(&self) -> bool {
        self.font.is_some()
    }

    /// Loads the font at `path`, if any.
    ///
    /// # Returns
    /// - `Ok(TicketRenderer)` - Renderer with the font loaded, or without text when `path` is `None`
    /// - `Err(Error::IoError)` - Font file could not be read
    /// - `Err(Error::ConfigError)` - File is not a usable font
    pub fn from_font_path(path: Option<&str>) -> Result<Self, Error> {
        let Some(path) = path else {
            tracing::warn!("No ticket font configured, tickets will be rendered without text");
            return Ok(Self::new(None));
        };

        let bytes = std::fs::read(path)?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| ConfigError::InvalidEnvValue {
            var: "TICKET_FONT_PATH".to_string(),
            reason: format!("{}: {}", path, e),
        })?;

        Ok(Self::new(Some(font)))
    }

    /// Renders a ticket as PNG bytes.
    ///
    /// A missing or undecodable `photo` is replaced with a placeholder box, it never fails
    /// the render.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PNG encoded ticket
    /// - `Err(Error::ImageError)` - PNG encoding failed
    pub fn render(&self, details: &TicketDetails, photo: Option<&[u8]>) -> Result<Vec<u8>, Error> {
        let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(0, 0).of_size(CANVAS_WIDTH, HEADER_HEIGHT),
            HEADER,
        );

        if !self.draws_text() {
            tracing::warn!(
                "Rendering ticket for {} without text, set TICKET_FONT_PATH to print details",
                details.name
            );
        }

        if let Some(font) = &self.font {
            draw_text_mut(
                &mut canvas,
                TEXT,
                TEXT_X,
                NAME_Y,
                PxScale::from(NAME_SCALE),
                font,
                &details.name,
            );

            let lines = [
                format!("Date: {}", details.date),
                format!("Meal: {}", details.meal),
                format!("Caffeine: {}", details.caffeine),
            ];
            for (i, line) in lines.iter().enumerate() {
                draw_text_mut(
                    &mut canvas,
                    TEXT,
                    TEXT_X,
                    DETAIL_Y + DETAIL_SPACING * i as i32,
                    PxScale::from(DETAIL_SCALE),
                    font,
                    line,
                );
            }
        }

        match photo.map(image::load_from_memory) {
            Some(Ok(photo)) => self.draw_photo(&mut canvas, &photo),
            Some(Err(e)) => {
                tracing::warn!("Failed to decode profile photo, using placeholder: {}", e);
                self.draw_placeholder(&mut canvas);
            }
            None => self.draw_placeholder(&mut canvas),
        }

        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(canvas).write_to(&mut png, ImageFormat::Png)?;

        Ok(png.into_inner())
    }

    /// Scales the photo to fit the photo region keeping its aspect ratio and centres it.
    fn draw_photo(&self, canvas: &mut RgbaImage, photo: &DynamicImage) {
        let fitted = photo
            .resize(PHOTO_WIDTH, PHOTO_HEIGHT, FilterType::Triangle)
            .to_rgba8();

        let x = PHOTO_X + (PHOTO_WIDTH - fitted.width()) / 2;
        let y = PHOTO_Y + (PHOTO_HEIGHT - fitted.height()) / 2;

        image::imageops::overlay(canvas, &fitted, x as i64, y as i64);
    }

    fn draw_placeholder(&self, canvas: &mut RgbaImage) {
        draw_filled_rect_mut(
            canvas,
            Rect::at(PHOTO_X as i32, PHOTO_Y as i32).of_size(PHOTO_WIDTH, PHOTO_HEIGHT),
            PLACEHOLDER,
        );

        if let Some(font) = &self.font {
            draw_text_mut(
                canvas,
                PLACEHOLDER_TEXT,
                (PHOTO_X + 90) as i32,
                (PHOTO_Y + PHOTO_HEIGHT / 2 - 14) as i32,
                PxScale::from(DETAIL_SCALE),
                font,
                "No photo",
            );
        }
    }
}
