use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use omok::{board_text, status_markdown, GameState};

/// Markers delimiting the game-state section of the README.
const SECTION_START: &str = "### Current Game State";
const SECTION_END: &str = "### 📋 How to Play";

/// The Markdown image reference that [`embed_svg`] replaces.
const IMAGE_LABEL: &str = "![Omok Game Board](";

/// Replace the game-state section of the README with the current text
/// board and status block.
///
/// Everything outside the two markers is left untouched. A README without
/// the markers is reported as an error and not modified.
pub fn update_text_board(readme_path: &Path, state: &GameState) -> anyhow::Result<()> {
    let contents = fs::read_to_string(readme_path)?;
    let section = format!(
        "{}\n\n```\n{}\n```\n\n{}\n\n",
        SECTION_START,
        board_text(state),
        status_markdown(state)
    );
    let updated = splice_section(&contents, &section)?;
    fs::write(readme_path, updated)?;
    Ok(())
}

fn splice_section(contents: &str, section: &str) -> anyhow::Result<String> {
    let Some(start) = contents.find(SECTION_START) else {
        anyhow::bail!("Could not find the '{}' marker in the README", SECTION_START);
    };
    let Some(end) = contents[start..].find(SECTION_END).map(|end| start + end) else {
        anyhow::bail!("Could not find the '{}' marker in the README", SECTION_END);
    };
    Ok(format!(
        "{}{}{}",
        &contents[..start],
        section,
        &contents[end..]
    ))
}

/// Replace the board image reference in the README with a base64 data URI
/// of `svg`.
///
/// Embedding the image instead of linking to a file sidesteps stale
/// caches of externally hosted image URLs. Works on both a plain file
/// reference and a previously embedded data URI.
pub fn embed_svg(readme_path: &Path, svg: &str) -> anyhow::Result<()> {
    let contents = fs::read_to_string(readme_path)?;
    let Some(label) = contents.find(IMAGE_LABEL) else {
        anyhow::bail!("Could not find the '{}...' image reference in the README", IMAGE_LABEL);
    };
    let target_start = label + IMAGE_LABEL.len();
    let Some(target_end) = contents[target_start..]
        .find(')')
        .map(|end| target_start + end)
    else {
        anyhow::bail!("Unterminated image reference in the README");
    };

    let updated = format!(
        "{}data:image/svg+xml;base64,{}{}",
        &contents[..target_start],
        STANDARD.encode(svg.as_bytes()),
        &contents[target_end..]
    );
    fs::write(readme_path, updated)?;
    Ok(())
}
