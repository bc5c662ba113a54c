//! XML rendering of a [`FeedDocument`] and the file-backed [`YmlWriter`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use ymlfeed_core::{Category, FeedWriter, Product, ShopInfo};

use crate::error::FeedError;
use crate::model::{FeedCategory, FeedDocument, FeedOffer};

const DOCTYPE: &str = r#"yml_catalog SYSTEM "shops.dtd""#;

/// Writes feeds to disk, stamped with the current local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct YmlWriter;

impl FeedWriter for YmlWriter {
    type Error = FeedError;

    fn write_feed(
        &self,
        output_path: &Path,
        shop: &ShopInfo,
        categories: &[Category],
        products: &[Product],
    ) -> Result<(), FeedError> {
        let doc = FeedDocument::build(&chrono::Local::now(), shop, categories, products);
        write_feed_file(output_path, &doc)?;
        tracing::info!(output_path = %output_path.display(), "YML file created");
        Ok(())
    }
}

/// Creates (or truncates) `path` and writes `doc` into it.
///
/// A failure after creation may leave a partial file behind.
///
/// # Errors
///
/// Returns [`FeedError::Create`] if the file cannot be created, and
/// [`FeedError::Io`] / [`FeedError::Xml`] if writing or flushing fails.
pub fn write_feed_file(path: &Path, doc: &FeedDocument) -> Result<(), FeedError> {
    let file = File::create(path).map_err(|source| FeedError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = render_feed(doc, BufWriter::new(file))?;
    out.flush()?;
    Ok(())
}

/// Renders `doc` as a complete YML document (declaration, DOCTYPE, body)
/// into `out`, indented by two spaces per level, and hands `out` back.
///
/// # Errors
///
/// Returns [`FeedError`] if writing to `out` fails.
pub fn render_feed<W: Write>(doc: &FeedDocument, out: W) -> Result<W, FeedError> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;

    let root = BytesStart::new("yml_catalog").with_attributes([("date", doc.date.as_str())]);
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("shop")))?;

    let shop = &doc.shop;
    text_element(&mut writer, "name", &shop.name)?;
    text_element(&mut writer, "company", &shop.company)?;
    text_element(&mut writer, "url", &shop.url)?;

    writer.write_event(Event::Start(BytesStart::new("currencies")))?;
    for currency in &shop.currencies {
        let elem = BytesStart::new("currency")
            .with_attributes([("id", currency.id.as_str()), ("rate", currency.rate.as_str())]);
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new("currencies")))?;

    write_list(&mut writer, "categories", &shop.categories, write_category)?;
    write_list(&mut writer, "offers", &shop.offers, write_offer)?;

    writer.write_event(Event::End(BytesEnd::new("shop")))?;
    writer.write_event(Event::End(BytesEnd::new("yml_catalog")))?;

    let mut out = writer.into_inner();
    out.write_all(b"\n")?;
    Ok(out)
}

/// Writes `<name>` wrapping `items`, or `<name/>` when there are none.
fn write_list<W, T, F>(
    writer: &mut Writer<W>,
    name: &str,
    items: &[T],
    mut write_item: F,
) -> Result<(), FeedError>
where
    W: Write,
    F: FnMut(&mut Writer<W>, &T) -> Result<(), FeedError>,
{
    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    for item in items {
        write_item(writer, item)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_category<W: Write>(
    writer: &mut Writer<W>,
    category: &FeedCategory,
) -> Result<(), FeedError> {
    let mut elem = BytesStart::new("category").with_attributes([("id", category.id.as_str())]);
    if let Some(parent_id) = &category.parent_id {
        elem.push_attribute(("parentId", parent_id.as_str()));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(&category.name)))?;
    writer.write_event(Event::End(BytesEnd::new("category")))?;
    Ok(())
}

fn write_offer<W: Write>(writer: &mut Writer<W>, offer: &FeedOffer) -> Result<(), FeedError> {
    let available = if offer.available { "true" } else { "false" };
    let elem = BytesStart::new("offer")
        .with_attributes([("id", offer.id.as_str()), ("available", available)]);
    writer.write_event(Event::Start(elem))?;

    if let Some(url) = &offer.url {
        text_element(writer, "url", url)?;
    }
    text_element(writer, "price", &offer.price.to_string())?;
    text_element(writer, "currencyId", &offer.currency_id)?;
    text_element(writer, "categoryId", &offer.category_id)?;
    for picture in &offer.pictures {
        text_element(writer, "picture", picture)?;
    }
    text_element(writer, "name", &offer.name)?;
    for (name, value) in [
        ("vendor", &offer.vendor),
        ("barcode", &offer.barcode),
        ("description", &offer.description),
    ] {
        if let Some(value) = value {
            text_element(writer, name, value)?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("offer")))?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
