use std::{fs, path::PathBuf};

use crate::controller::score::ScoreEdit;
use crate::model::{Directory, HOLES, MAX_STROKES};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the path is not a readable folder
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The folder '{dir}' is not readable."));
    }
    Ok(path)
}

/// Load and validate the directory json.
///
/// # Errors
///
/// Will return `Err` if the file is not readable, is not valid json, or
/// holds an invalid course
pub fn check_readable_file_and_json(file: &str) -> Result<Directory, String> {
    let path = check_readable_file(file)?;
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    Directory::from_json(&contents).map_err(|e| format!("The json file '{file}' is invalid: {e}"))
}

/// Parse `ENTITY:HOLE:STROKES` where HOLE is 1-18 and STROKES is a positive
/// number or `-` to clear the hole.
///
/// # Errors
///
/// Will return `Err` if any of the three parts is missing or malformed
pub fn parse_edit(value: &str) -> Result<ScoreEdit, String> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(strokes), Some(hole), Some(entity)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("Edit '{value}' should look like ENTITY:HOLE:STROKES."));
    };
    if entity.is_empty() {
        return Err(format!("Edit '{value}' is missing the entity id."));
    }

    let hole: usize = hole
        .parse()
        .map_err(|_| format!("Hole '{hole}' in edit '{value}' is not a number."))?;
    if !(1..=HOLES).contains(&hole) {
        return Err(format!("Hole {hole} in edit '{value}' should be between 1 and {HOLES}."));
    }

    let strokes = match strokes {
        "-" => None,
        s => {
            let n: i32 = s
                .parse()
                .map_err(|_| format!("Strokes '{s}' in edit '{value}' is not a number."))?;
            if !(1..=MAX_STROKES).contains(&n) {
                return Err(format!(
                    "Strokes in edit '{value}' should be between 1 and {MAX_STROKES}."
                ));
            }
            Some(n)
        }
    };

    Ok(ScoreEdit::new(entity, hole - 1, strokes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_based_hole() {
        let edit = parse_edit("7:3:5").unwrap();
        assert_eq!(edit.entity_id, "7");
        assert_eq!(edit.hole_index, 2);
        assert_eq!(edit.strokes, Some(5));
    }

    #[test]
    fn dash_clears_the_hole() {
        let edit = parse_edit("team-a:18:-").unwrap();
        assert_eq!(edit.hole_index, 17);
        assert_eq!(edit.strokes, None);
    }

    #[test]
    fn rejects_bad_edits() {
        assert!(parse_edit("7:0:5").is_err());
        assert!(parse_edit("7:19:5").is_err());
        assert!(parse_edit("7:4:0").is_err());
        assert!(parse_edit("7:4:100").is_err());
        assert!(parse_edit("7:4:99").is_ok());
        assert!(parse_edit("7:4").is_err());
        assert!(parse_edit(":4:4").is_err());
        assert!(parse_edit("7:x:4").is_err());
    }
}
