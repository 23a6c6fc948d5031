//! Document assembly around a substituted markup body.

/// Title placed in the head of every composed document.
const DOCUMENT_TITLE: &str = "Email Template";

/// Wrap markup, styles, and script into one standalone HTML document.
///
/// The skeleton is fixed: doctype, head with charset and viewport metas,
/// a `<style>` element holding the style rules verbatim, a body holding
/// the (already substituted) markup, and a trailing `<script>` element
/// holding the script body verbatim. Assembly is pure string
/// concatenation — no parsing, no well-formedness validation, and nothing
/// non-deterministic, so identical inputs produce byte-identical output.
pub fn compose_document(markup: &str, styles: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         {}\n\
         <script>{}</script>\n\
         </body>\n\
         </html>\n",
        DOCUMENT_TITLE, styles, markup, script
    )
}
