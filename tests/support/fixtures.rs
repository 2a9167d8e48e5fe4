//! HTML fixtures shaped like the catalog's results and get pages.
#![allow(dead_code)]

/// One data row with the catalog's eleven-column layout.
pub fn result_row(author: &str, md5: &str, title: &str, year: &str, ext: &str) -> String {
    format!(
        "<tr valign=\"top\"><td>1</td><td><a href=\"search.php?req={author}&column=author\">{author}</a></td>\
         <td width=\"500\"><a href=\"book/index.php?md5={md5}\" title=\"\" id=\"1\">{title}</a></td>\
         <td>Publisher</td><td nowrap>{year}</td><td>320</td><td>English</td><td nowrap>4 Mb</td>\
         <td nowrap>{ext}</td><td><a href=\"http://mirror/{md5}\">[1]</a></td><td><a href=\"edit\">[edit]</a></td></tr>"
    )
}

/// Full results page with a header row followed by `rows`.
pub fn results_page(rows: &[String]) -> String {
    format!(
        "<html><head><title>Library Genesis</title></head><body>\
         <table width=\"100%\"><tr><td>menu</td></tr></table>\
         <table width=\"100%\" cellspacing=\"1\" cellpadding=\"1\" rules=\"rows\" class=\"c\" align=\"center\">\
         <tr valign=\"top\" bgcolor=\"#C0C0C0\"><td><b>ID</b></td><td><b>Author(s)</b></td><td><b>Title</b></td>\
         <td><b>Publisher</b></td><td><b>Year</b></td><td><b>Pages</b></td><td><b>Language</b></td>\
         <td><b>Size</b></td><td><b>Extension</b></td><td><b>Mirrors</b></td><td><b>Edit</b></td></tr>\
         {}</table></body></html>",
        rows.concat()
    )
}

/// Get page whose download link is labeled `GET` with `href`.
pub fn get_page(href: &str) -> String {
    format!(
        "<html><body><table><tr><td><a href=\"https://other.example.org/mirror\">Mirror</a></td>\
         <td><a href=\"{href}\">GET</a></td></tr></table></body></html>"
    )
}
