use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect_m::board::{Board, Cell};

/// Draws `board` to stdout as a grid, one `+---+` rule between rows
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();
    let size = board.size();
    let border = format!("+{}\n", "---+".repeat(size));

    stdout.queue(PrintStyledContent(style(border.clone())))?;
    for row in 0..size {
        stdout.queue(PrintStyledContent(style("|")))?;
        for column in 0..size {
            let cell = board.cell(row, column);
            stdout
                .queue(PrintStyledContent(style(" ")))?
                .queue(PrintStyledContent(
                    style(cell.symbol())
                        .attribute(Attribute::Bold)
                        .with(match cell {
                            Cell::X => Color::Red,
                            Cell::O => Color::Yellow,
                            Cell::Empty => Color::Reset,
                        }),
                ))?
                .queue(PrintStyledContent(style(" |")))?;
        }
        stdout
            .queue(PrintStyledContent(style("\n")))?
            .queue(PrintStyledContent(style(border.clone())))?;
    }

    let columns: String = (1..=size).map(|c| format!("{:^4}", c)).collect();
    stdout.queue(PrintStyledContent(style(format!(" {}\n", columns))))?;
    stdout.flush()?;
    Ok(())
}
