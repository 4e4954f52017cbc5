//! Text and JSON rendering for command output.

use std::fmt::Write as _;

use blind_core::cut_list::CuttingPlan;
use blind_core::layout::StructuralLayout;
use blind_core::pieces::Piece;
use blind_core::plan::FramePlan;
use blind_core::project::FrameRecord;
use serde::Serialize;

use crate::error::CliError;

/// Format any serializable value as pretty JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a structural layout as a text report
#[must_use]
pub fn format_layout(layout: &StructuralLayout) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Frame {:.1} x {:.1}, slat depth {:.1}",
        layout.width, layout.height, layout.slat_depth
    );

    if layout.supports.is_empty() {
        let _ = writeln!(output, "\nNo additional supports.");
    } else {
        let _ = writeln!(
            output,
            "\nSupports ({}, spacing {:.1}):",
            layout.additional_supports, layout.effective_spacing
        );
        let _ = writeln!(output, "{:>5}  {:>10}", "#", "POSITION");
        for support in &layout.supports {
            let marker = if support.is_custom { " (custom)" } else { "" };
            let _ = writeln!(output, "{:>5}  {:>10.1}{marker}", support.index, support.position);
        }
    }

    let _ = writeln!(output, "\nPanels:");
    let _ = writeln!(output, "{:>5}  {:>10}  {:>10}  {:>10}", "#", "START", "END", "EXTENT");
    for panel in &layout.panels {
        let _ = writeln!(
            output,
            "{:>5}  {:>10.1}  {:>10.1}  {:>10.1}",
            panel.index,
            panel.start,
            panel.end(),
            panel.extent
        );
    }

    if !layout.division_marks.is_empty() {
        let marks: Vec<String> = layout
            .division_marks
            .iter()
            .map(|m| format!("{:.1}", m.position))
            .collect();
        let _ = writeln!(output, "\nDivision marks: {}", marks.join(", "));
    }

    output.trim_end().to_string()
}

/// Format a piece list as a table
#[must_use]
pub fn format_pieces(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "No pieces.".to_string();
    }

    let kind_width = pieces
        .iter()
        .map(|p| p.kind.display_name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<kind_width$}  {:>10}  {:>10}  {:>8}  {:>4}",
        "KIND", "LENGTH", "WIDTH", "DEPTH", "QTY"
    );
    let _ = writeln!(
        output,
        "{:-<kind_width$}  {:->10}  {:->10}  {:->8}  {:->4}",
        "", "", "", "", ""
    );
    for piece in pieces {
        let depth = piece.depth.map_or_else(|| "-".to_string(), |d| format!("{d:.1}"));
        let _ = writeln!(
            output,
            "{:<kind_width$}  {:>10.1}  {:>10.1}  {:>8}  {:>4}",
            piece.kind.display_name(),
            piece.length,
            piece.face_width,
            depth,
            piece.quantity
        );
    }

    output.trim_end().to_string()
}

/// Format a cutting plan, one line per stock board
#[must_use]
pub fn format_cutting_plan(plan: &CuttingPlan) -> String {
    if plan.assignments.is_empty() {
        return "No boards to cut.".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Stock length {:.1}:", plan.stock_length);
    for (i, board) in plan.assignments.iter().enumerate() {
        let cuts: Vec<String> = board.cuts.iter().map(|c| format!("{c:.1}")).collect();
        let _ = writeln!(
            output,
            "  Board {}: {}  (waste {:.1}, {:.1}% used)",
            i + 1,
            cuts.join(" + "),
            board.waste,
            board.efficiency() * 100.0
        );
    }
    let _ = writeln!(
        output,
        "{} boards, {} cuts, total waste {:.1}, efficiency {:.1}%",
        plan.board_count(),
        plan.cut_count(),
        plan.total_waste(),
        plan.efficiency() * 100.0
    );

    output.trim_end().to_string()
}

/// Format a whole frame plan
#[must_use]
pub fn format_plan(plan: &FramePlan) -> String {
    let summary = &plan.summary;
    let mut output = String::new();

    let _ = writeln!(output, "{}", format_layout(&plan.layout));
    let _ = writeln!(output, "\n{}", format_pieces(&plan.pieces));
    let _ = writeln!(output, "\n{}", format_cutting_plan(&plan.cutting_plan));
    let _ = writeln!(
        output,
        "\nCovering: {}  Area: {:.0}  Board length: {:.1}",
        plan.parameters.covering_material, summary.area, summary.board_length
    );

    output.trim_end().to_string()
}

/// Format frame records as a table
#[must_use]
pub fn format_frames(frames: &[&FrameRecord]) -> String {
    if frames.is_empty() {
        return "No frames found.".to_string();
    }

    let name_width = frames
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<name_width$}  {:>8}  {:>8}  {:<8}  {}",
        "NAME", "WIDTH", "HEIGHT", "COVERING", "MODIFIED"
    );
    let _ = writeln!(
        output,
        "{:-<name_width$}  {:->8}  {:->8}  {:-<8}  {:-<16}",
        "", "", "", "", ""
    );
    for frame in frames {
        let p = &frame.parameters;
        let _ = writeln!(
            output,
            "{:<name_width$}  {:>8.1}  {:>8.1}  {:<8}  {}",
            frame.name,
            p.width,
            p.height,
            p.covering_material.as_str(),
            frame.modified.format("%Y-%m-%d %H:%M")
        );
    }

    output.trim_end().to_string()
}
