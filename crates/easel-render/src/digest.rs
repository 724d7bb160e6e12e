//! Canonical frame digests for determinism verification.
//!
//! Two backends (or two runs, or two platforms) fed the same frame of
//! commands must be geometrically identical. The digest makes that claim
//! testable: it hashes the raw fixed-point bit patterns of every command,
//! so a coordinate that differs by even one ULP changes the hex string,
//! while serializer or formatting differences cannot.

use easel_math::rect::Rect;
use easel_math::vec2::Vec2;
use easel_math::Fixed;

use crate::primitive::PrimitiveCommand;
use crate::style::{Color, Stroke, Style};

/// Compute the BLAKE3 hex digest (64 lowercase hex chars) of a primitive
/// command stream.
///
/// The byte encoding is canonical: a little-endian `u64` command count,
/// then per command a tag byte followed by its fields in declaration
/// order. `Fixed` scalars contribute their little-endian raw bits, colors
/// their four channel bytes, `Option`s a presence byte, and vertex lists a
/// little-endian `u64` count before the vertices. No serializer sits
/// between the geometry and the hash.
pub fn frame_digest(commands: &[PrimitiveCommand]) -> String {
    let mut bytes = Vec::with_capacity(8 + commands.len() * 48);
    push_u64(&mut bytes, commands.len() as u64);
    for command in commands {
        push_command(&mut bytes, command);
    }
    blake3::hash(&bytes).to_hex().to_string()
}

fn push_command(bytes: &mut Vec<u8>, command: &PrimitiveCommand) {
    match command {
        PrimitiveCommand::Line { start, end, stroke } => {
            bytes.push(0);
            push_vec2(bytes, *start);
            push_vec2(bytes, *end);
            push_stroke(bytes, stroke);
        }
        PrimitiveCommand::Circle {
            center,
            radius,
            style,
        } => {
            bytes.push(1);
            push_vec2(bytes, *center);
            push_fixed(bytes, *radius);
            push_style(bytes, style);
        }
        PrimitiveCommand::Rect { bounds, style } => {
            bytes.push(2);
            push_rect(bytes, *bounds);
            push_style(bytes, style);
        }
        PrimitiveCommand::Polygon { vertices, style } => {
            bytes.push(3);
            push_u64(bytes, vertices.len() as u64);
            for vertex in vertices {
                push_vec2(bytes, *vertex);
            }
            push_style(bytes, style);
        }
        PrimitiveCommand::Ellipse { bounds, style } => {
            bytes.push(4);
            push_rect(bytes, *bounds);
            push_style(bytes, style);
        }
        PrimitiveCommand::TextureRegion {
            texture,
            source,
            dest,
            tint,
        } => {
            bytes.push(5);
            bytes.extend_from_slice(&texture.0.to_le_bytes());
            push_rect(bytes, *source);
            push_rect(bytes, *dest);
            push_color(bytes, *tint);
        }
    }
}

fn push_u64(bytes: &mut Vec<u8>, value: u64) {
    bytes.extend_from_slice(&value.to_le_bytes());
}

fn push_fixed(bytes: &mut Vec<u8>, value: Fixed) {
    bytes.extend_from_slice(&value.to_bits().to_le_bytes());
}

fn push_vec2(bytes: &mut Vec<u8>, v: Vec2) {
    push_fixed(bytes, v.x);
    push_fixed(bytes, v.y);
}

fn push_rect(bytes: &mut Vec<u8>, rect: Rect) {
    push_vec2(bytes, rect.min);
    push_vec2(bytes, rect.max);
}

fn push_color(bytes: &mut Vec<u8>, color: Color) {
    bytes.extend_from_slice(&[color.r, color.g, color.b, color.a]);
}

fn push_stroke(bytes: &mut Vec<u8>, stroke: &Stroke) {
    push_color(bytes, stroke.color);
    push_fixed(bytes, stroke.width);
    match stroke.dash {
        Some(dash) => {
            bytes.push(1);
            push_fixed(bytes, dash.on);
            push_fixed(bytes, dash.off);
        }
        None => bytes.push(0),
    }
}

fn push_style(bytes: &mut Vec<u8>, style: &Style) {
    match style.fill {
        Some(color) => {
            bytes.push(1);
            push_color(bytes, color);
        }
        None => bytes.push(0),
    }
    match &style.stroke {
        Some(stroke) => {
            bytes.push(1);
            push_stroke(bytes, stroke);
        }
        None => bytes.push(0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
