//! XML report exporter
//!
//! Root `<convoy>` element with one `<vehicle>` per row; each column
//! becomes a child element named after the column, holding the value
//! as text. No attributes, no namespaces.

use std::path::Path;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use convoy_domain::model::{Vehicle, HEADER};
use convoy_types::{Error, Result};

/// Write the XML report. Returns the number of exported rows.
pub fn write_xml(path: &Path, vehicles: &[Vehicle]) -> Result<usize> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write_event(&mut writer, Event::Start(BytesStart::new("convoy")))?;
    for vehicle in vehicles {
        write_event(&mut writer, Event::Start(BytesStart::new("vehicle")))?;
        let values = [
            vehicle.vehicle_id,
            vehicle.engine_capacity,
            vehicle.fuel_consumption,
            vehicle.maximum_load,
        ];
        for (column, value) in HEADER.iter().zip(values) {
            write_event(&mut writer, Event::Start(BytesStart::new(*column)))?;
            write_event(&mut writer, Event::Text(BytesText::new(&value.to_string())))?;
            write_event(&mut writer, Event::End(BytesEnd::new(*column)))?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new("vehicle")))?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new("convoy")))?;

    std::fs::write(path, writer.into_inner())?;
    Ok(vehicles.len())
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}
