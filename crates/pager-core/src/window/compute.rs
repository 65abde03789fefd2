//! Window calculator implementation

use super::{PageToken, WindowError};

/// Compute the strip of tokens shown for `current_page` out of `total` pages.
///
/// Nine or fewer pages are listed in full with no ellipses. Beyond nine, a
/// cluster of pages is kept around the current page so the user can see and
/// select the two preceding and two succeeding page numbers; when the current
/// page approaches either end of the range, the cluster widens on that side
/// instead of shrinking. Runs of two or more skipped pages collapse into a
/// single ellipsis next to the boundary page, while a single skipped page is
/// always shown literally. Together these rules keep the strip exactly nine
/// tokens wide for every current page, so the previous/next controls never
/// shift around as the user moves.
pub fn compute_window(current_page: usize, total: usize) -> Result<Vec<PageToken>, WindowError> {
    if total < 1 {
        return Err(WindowError::InvalidTotal(total));
    }
    if current_page < 1 || current_page > total {
        return Err(WindowError::InvalidCurrentPage { current_page, total });
    }

    // A total page count of nine or fewer has no ellipses -- just a straight
    // run of sequential numbers.
    if total <= 9 {
        return Ok((1..=total).map(PageToken::Page).collect());
    }

    // Cluster bounds around the current page. The `total - 6` and `7` clamps
    // widen the cluster when the current page is within two pages of either
    // end of the range; changing them changes the visible strip width.
    let cluster_min = current_page.saturating_sub(2).max(1).min(total - 6);
    let cluster_max = (current_page + 2).min(total).max(7);

    let mut tokens = Vec::with_capacity(9);

    // Leading filler: collapse to page 1 plus an ellipsis only when at least
    // two pages between page 1 and the cluster would be skipped.
    if cluster_min >= 4 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::EllipsisBefore);
    } else {
        tokens.extend((1..cluster_min).map(PageToken::Page));
    }

    tokens.extend((cluster_min..=cluster_max).map(PageToken::Page));

    // Trailing filler, symmetric to the leading side.
    if cluster_max <= total - 3 {
        tokens.push(PageToken::EllipsisAfter);
        tokens.push(PageToken::Page(total));
    } else {
        tokens.extend((cluster_max + 1..=total).map(PageToken::Page));
    }

    Ok(tokens)
}
