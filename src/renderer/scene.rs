//! Scene building: game state in, draw commands out
//!
//! Every color here is derived from state flags; nothing visual is stored on
//! the player, so what you see can never disagree with what the sim does.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use super::command::{Color, DrawCommand, palette};
use crate::consts::*;
use crate::sim::{Defender, GameState, Player, PowerKind, PowerUp};

const TITLE_FONT: &str = "bold 28px Trebuchet MS";
const JERSEY_FONT: &str = "bold 12px Trebuchet MS";
const BADGE_FONT: &str = "bold 10px Trebuchet MS";
const OVERLAY_FONT: &str = "bold 36px Trebuchet MS";

/// Yard lines start this far below the end zone and repeat every `YARD_SPACING`
const FIRST_YARD_LINE: f32 = 40.0;
const YARD_SPACING: f32 = 60.0;

/// Body and jersey colors for the runner's current state
pub fn player_colors(player: &Player) -> (Color, Color) {
    if player.unstoppable() {
        (palette::SHADOW_BLACK, palette::JERSEY_BLACK)
    } else if player.truck_active() {
        (palette::GOLD, palette::HOME_RED)
    } else {
        (palette::HOME_BLUE, palette::HOME_RED)
    }
}

/// Ring drawn around the runner while a power is protecting them
pub fn aura_color(player: &Player) -> Option<Color> {
    if player.unstoppable() {
        Some(palette::BLACK.with_alpha(0.8))
    } else if player.truck_active() {
        Some(palette::GOLD.with_alpha(0.8))
    } else {
        None
    }
}

pub fn power_up_color(kind: PowerKind) -> Color {
    match kind {
        PowerKind::Truck => palette::GOLD,
        PowerKind::Hurdle => palette::ICE,
    }
}

/// Build the full frame for the current state
pub fn build_scene(state: &GameState) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(64 + state.defenders.len() * 2);
    let t = state.tick as f32;

    draw_field(&mut cmds, t);
    if state.running() {
        if let Some(power_up) = &state.power_up {
            draw_power_up(&mut cmds, power_up, t);
        }
    }
    for (index, defender) in state.defenders.iter().enumerate() {
        draw_defender(&mut cmds, defender, index, t);
    }
    draw_player(&mut cmds, &state.player, t);
    if !state.running() {
        draw_overlay(&mut cmds, &state.message);
    }
    cmds
}

fn draw_field(cmds: &mut Vec<DrawCommand>, t: f32) {
    let size = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
    cmds.push(DrawCommand::Clear { size });
    cmds.push(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size,
        color: palette::TURF,
    });

    // End zone with a slow glow
    let end_zone = Vec2::new(FIELD_WIDTH, END_ZONE_HEIGHT);
    let glow = 0.2 + (t / 20.0).sin() * 0.05;
    cmds.push(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size: end_zone,
        color: palette::HOME_BLUE,
    });
    cmds.push(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size: end_zone,
        color: palette::WHITE.with_alpha(glow),
    });
    cmds.push(DrawCommand::Text {
        text: "BILLS END ZONE".to_string(),
        pos: Vec2::new(FIELD_WIDTH / 2.0, 50.0),
        font: TITLE_FONT,
        color: palette::GOLD,
    });

    let mut y = END_ZONE_HEIGHT + FIRST_YARD_LINE;
    while y < FIELD_HEIGHT {
        let pulse = 0.15 + ((t + y) / 35.0).sin() * 0.05;
        cmds.push(DrawCommand::Line {
            from: Vec2::new(SIDELINES, y),
            to: Vec2::new(FIELD_WIDTH - SIDELINES, y),
            color: palette::WHITE.with_alpha(pulse),
            width: 1.0,
        });
        y += YARD_SPACING;
    }

    cmds.push(DrawCommand::StrokeRect {
        pos: Vec2::new(SIDELINES, END_ZONE_HEIGHT),
        size: Vec2::new(
            FIELD_WIDTH - SIDELINES * 2.0,
            FIELD_HEIGHT - END_ZONE_HEIGHT - 10.0,
        ),
        color: palette::WHITE.with_alpha(0.4),
        width: 2.0,
    });
}

fn draw_power_up(cmds: &mut Vec<DrawCommand>, power_up: &PowerUp, t: f32) {
    let pulse = 1.0 + (t / 10.0).sin() * 0.1;
    cmds.push(DrawCommand::FillCircle {
        center: power_up.pos,
        radius: power_up.radius * pulse,
        color: power_up_color(power_up.kind),
    });
    cmds.push(DrawCommand::Text {
        text: power_up.kind.badge().to_string(),
        pos: power_up.pos + Vec2::new(0.0, 3.0),
        font: BADGE_FONT,
        color: palette::INK,
    });
}

fn draw_defender(cmds: &mut Vec<DrawCommand>, defender: &Defender, index: usize, t: f32) {
    let bob = (t / 12.0 + index as f32).sin() * 1.5;
    let body = if defender.knocked_down {
        palette::DEFENDER.with_alpha(0.4)
    } else {
        palette::DEFENDER
    };
    let center = defender.pos + Vec2::new(0.0, bob);
    cmds.push(DrawCommand::FillCircle {
        center,
        radius: defender.radius,
        color: body,
    });
    // Helmet logo
    cmds.push(DrawCommand::FillCircle {
        center: center + Vec2::new(6.0, -4.0),
        radius: 4.0,
        color: palette::GOLD,
    });
}

fn draw_player(cmds: &mut Vec<DrawCommand>, player: &Player, t: f32) {
    let bob = (t / 10.0).sin() * 2.0;

    cmds.push(DrawCommand::FillEllipse {
        center: player.pos + Vec2::new(0.0, 6.0 + bob),
        radii: Vec2::new(18.0, 6.0),
        color: palette::BLACK.with_alpha(0.4),
    });

    // Lifted by the hurdle arc
    let center = player.pos + Vec2::new(0.0, bob - player.hurdle_arc());
    let (body, jersey) = player_colors(player);
    cmds.push(DrawCommand::FillCircle {
        center,
        radius: player.radius,
        color: body,
    });
    cmds.push(DrawCommand::FillRect {
        pos: center + Vec2::new(-8.0, -10.0),
        size: Vec2::new(16.0, 20.0),
        color: jersey,
    });
    cmds.push(DrawCommand::Text {
        text: "17".to_string(),
        pos: center + Vec2::new(0.0, 4.0),
        font: JERSEY_FONT,
        color: palette::WHITE,
    });

    if let Some(aura) = aura_color(player) {
        cmds.push(DrawCommand::StrokeArc {
            center,
            radius: player.radius + 6.0,
            start: 0.0,
            end: TAU,
            color: aura,
            width: 3.0,
        });
    }

    if player.spin_active() {
        let start = t / 6.0;
        cmds.push(DrawCommand::StrokeArc {
            center,
            radius: player.radius + 12.0,
            start,
            end: start + PI * 1.4,
            color: palette::WHITE.with_alpha(0.7),
            width: 2.0,
        });
    }
}

fn draw_overlay(cmds: &mut Vec<DrawCommand>, message: &str) {
    cmds.push(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        color: palette::BLACK.with_alpha(0.6),
    });
    cmds.push(DrawCommand::Text {
        text: message.to_string(),
        pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
        font: OVERLAY_FONT,
        color: palette::WHITE,
    });
}
