//! RSS product feed XML rendering.

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use feed_model::{CHANNEL_TAG, FeedDocument, FeedItem, ITEM_TAG, RSS_TAG};

/// Renders the whole document into memory, pretty-printed with an XML
/// declaration.
pub fn render_feed(document: &FeedDocument) -> Result<Vec<u8>> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let (prefix, namespace) = document.namespace();
    let ns_attribute = format!("xmlns:{prefix}");
    let mut root = BytesStart::new(RSS_TAG);
    root.push_attribute((ns_attribute.as_str(), namespace));
    root.push_attribute(("version", document.version()));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new(CHANNEL_TAG)))?;

    for item in document.items() {
        write_item(&mut xml, item)?;
    }

    xml.write_event(Event::End(BytesEnd::new(CHANNEL_TAG)))?;
    xml.write_event(Event::End(BytesEnd::new(RSS_TAG)))?;
    Ok(xml.into_inner())
}

fn write_item(xml: &mut Writer<Vec<u8>>, item: &FeedItem) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(ITEM_TAG)))?;
    for (field, value) in item.fields() {
        let tag = field.as_str();
        xml.write_event(Event::Start(BytesStart::new(tag)))?;
        xml.write_event(Event::Text(BytesText::new(value)))?;
        xml.write_event(Event::End(BytesEnd::new(tag)))?;
    }
    xml.write_event(Event::End(BytesEnd::new(ITEM_TAG)))?;
    Ok(())
}
