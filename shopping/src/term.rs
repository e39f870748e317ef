use std::io::{stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

pub type TermError = std::io::Error;

pub fn reset() -> Result<(), TermError> {
    let mut stdout = stdout();
    execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

pub fn print_title(title: &str, color: style::Color) -> Result<(), TermError> {
    let mut stdout = stdout();
    execute!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 1),
        SetForegroundColor(color),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;

    Ok(())
}

pub fn space() -> Result<(), TermError> {
    let mut stdout = stdout();
    write!(stdout, "\r\n")?;
    Ok(())
}

pub fn println(value: &str, color: style::Color) -> Result<(), TermError> {
    let mut stdout = stdout();

    write!(
        stdout,
        "\r{} {}\r\n{}",
        SetForegroundColor(color),
        value,
        ResetColor
    )?;

    Ok(())
}

/// Draws `rows` under the title followed by a selectable list of `options`.
/// Returns the picked index, or `None` when the user quits with `q`/Esc.
pub fn menu(title: &str, rows: &[String], options: &[String]) -> Result<Option<usize>, TermError> {
    let mut stdout = stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, cursor::Hide)?;

    let selected = pick(title, rows, options);

    execute!(stdout, cursor::Show)?;
    terminal::disable_raw_mode()?;
    selected
}

fn pick(title: &str, rows: &[String], options: &[String]) -> Result<Option<usize>, TermError> {
    let mut stdout = stdout();
    let mut selected = 0;

    loop {
        print_title(title, style::Color::Green)?;
        execute!(stdout, cursor::MoveTo(0, 3))?;

        if rows.is_empty() {
            println("(the list is empty)", style::Color::DarkGrey)?;
        }
        for row in rows {
            println(row, style::Color::White)?;
        }

        space()?;
        for (i, option) in options.iter().enumerate() {
            if i == selected {
                write!(
                    stdout,
                    "{}> {}\r\n{}",
                    SetForegroundColor(style::Color::DarkCyan),
                    option,
                    ResetColor
                )?;
            } else {
                write!(stdout, "  {}\r\n", option)?;
            }
        }

        space()?;
        println("## Accept - <Enter> || Exit - <Q>", style::Color::Yellow)?;

        stdout.flush()?;

        if let Event::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            match key_event.code {
                KeyCode::Up => selected = selected.saturating_sub(1),
                KeyCode::Down => {
                    if selected + 1 < options.len() {
                        selected += 1;
                    }
                }
                KeyCode::Enter if !options.is_empty() => return Ok(Some(selected)),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                _ => {}
            }
        }
    }
}
