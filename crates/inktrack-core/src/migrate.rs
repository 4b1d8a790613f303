use crate::error::{InktrackError, Result};
use crate::types::Status;

/// Map a stored status label to its canonical state.
///
/// The table is total over every label the store has ever written: the
/// canonical snake_case names, the zh-TW display labels the first deployment
/// persisted, and the older queue vocabulary that predates those. Anything
/// else is an explicit error — the loader never guesses.
pub fn canonical_status(label: &str) -> Result<Status> {
    match label.trim() {
        "not_started" | "未開始" | "排單中" => Ok(Status::NotStarted),
        "in_progress" | "進行中" | "撰寫中" => Ok(Status::InProgress),
        "revision" | "待修改" | "潤飾中" => Ok(Status::Revision),
        "completed" | "完成" | "結案" => Ok(Status::Completed),
        other => Err(InktrackError::UnknownStatusLabel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_map_to_themselves() {
        for &status in Status::all() {
            assert_eq!(canonical_status(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn display_labels_migrate_forward() {
        assert_eq!(canonical_status("未開始").unwrap(), Status::NotStarted);
        assert_eq!(canonical_status("進行中").unwrap(), Status::InProgress);
        assert_eq!(canonical_status("待修改").unwrap(), Status::Revision);
        assert_eq!(canonical_status("完成").unwrap(), Status::Completed);
    }

    #[test]
    fn queue_vocabulary_migrates_forward() {
        assert_eq!(canonical_status("排單中").unwrap(), Status::NotStarted);
        assert_eq!(canonical_status("撰寫中").unwrap(), Status::InProgress);
        assert_eq!(canonical_status("潤飾中").unwrap(), Status::Revision);
        assert_eq!(canonical_status("結案").unwrap(), Status::Completed);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(canonical_status(" completed ").unwrap(), Status::Completed);
    }

    #[test]
    fn unknown_label_is_an_error_not_a_guess() {
        assert!(matches!(
            canonical_status("archived"),
            Err(InktrackError::UnknownStatusLabel(_))
        ));
        assert!(matches!(
            canonical_status(""),
            Err(InktrackError::UnknownStatusLabel(_))
        ));
    }
}
