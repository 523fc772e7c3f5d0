use std::fmt::Write;

use once_cell::sync::Lazy;

use crate::schema::SchemaDict;

/// Schema namespace of the service.
pub const NAMESPACE: &str = "TransactionsService";
/// Entity container name.
pub const CONTAINER: &str = "Container";

static TRANSACTIONS_DOCUMENT: Lazy<String> = Lazy::new(|| EdmDocument::render(SchemaDict::transactions()));

/// CSDL v4 metadata document for a declared entity schema.
pub struct EdmDocument;

impl EdmDocument {
    /// The document served at `$metadata`, rendered once.
    pub fn transactions() -> &'static str {
        &TRANSACTIONS_DOCUMENT
    }

    pub fn render(schema: &SchemaDict) -> String {
        let mut xml = String::new();
        Self::write_document(&mut xml, schema).expect("write to String");
        xml
    }

    fn write_document(xml: &mut String, schema: &SchemaDict) -> std::fmt::Result {
        writeln!(xml, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
        writeln!(xml, r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">"#)?;
        writeln!(xml, r#"  <edmx:DataServices>"#)?;
        writeln!(xml, r#"    <Schema Namespace="{NAMESPACE}" xmlns="http://docs.oasis-open.org/odata/ns/edm">"#)?;
        writeln!(xml, r#"      <EntityType Name="{}">"#, schema.entity_type)?;
        writeln!(xml, r#"        <Key>"#)?;
        writeln!(xml, r#"          <PropertyRef Name="{}"/>"#, schema.key)?;
        writeln!(xml, r#"        </Key>"#)?;
        for (name, info) in &schema.fields {
            writeln!(
                xml,
                r#"        <Property Name="{}" Type="{}" Nullable="{}"/>"#,
                name,
                info.ty.edm_name(),
                info.nullable,
            )?;
        }
        writeln!(xml, r#"      </EntityType>"#)?;
        writeln!(xml, r#"      <EntityContainer Name="{CONTAINER}">"#)?;
        writeln!(
            xml,
            r#"        <EntitySet Name="{}" EntityType="{NAMESPACE}.{}"/>"#,
            schema.entity_set,
            schema.entity_type,
        )?;
        writeln!(xml, r#"      </EntityContainer>"#)?;
        writeln!(xml, r#"    </Schema>"#)?;
        writeln!(xml, r#"  </edmx:DataServices>"#)?;
        write!(xml, r#"</edmx:Edmx>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_properties_with_declared_types() {
        let xml = EdmDocument::transactions();

        assert_eq!(xml.matches("<Property ").count(), 12);
        for (name, ty) in [
            ("id", "Edm.Int32"), ("guest_count", "Edm.Int32"),
            ("outlet", "Edm.String"), ("date", "Edm.String"), ("day", "Edm.String"), ("category", "Edm.String"),
            ("quantity", "Edm.Double"), ("cost_price", "Edm.Double"), ("selling_price", "Edm.Double"),
            ("total_sales", "Edm.Double"), ("total_cost_price", "Edm.Double"), ("profit", "Edm.Double"),
        ] {
            let needle = format!(r#"<Property Name="{}" Type="{}""#, name, ty);
            assert!(xml.contains(&needle), "missing {needle}");
        }
    }

    #[test]
    fn test_key_entity_set_and_container() {
        let xml = EdmDocument::transactions();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<PropertyRef Name="id"/>"#));
        assert!(xml.contains(r#"<Property Name="id" Type="Edm.Int32" Nullable="false"/>"#));
        assert!(xml.contains(r#"<EntityContainer Name="Container">"#));
        assert!(xml.contains(r#"<EntitySet Name="Transactions" EntityType="TransactionsService.Transaction"/>"#));
        assert_eq!(xml.matches("<EntityType ").count(), 1);
        assert_eq!(xml.matches("<EntitySet ").count(), 1);
    }

    #[test]
    fn test_elements_are_balanced() {
        let xml = EdmDocument::transactions();

        for tag in ["edmx:Edmx", "edmx:DataServices", "Schema", "EntityType", "Key", "EntityContainer"] {
            let open = xml.matches(&format!("<{tag} ")).count() + xml.matches(&format!("<{tag}>")).count();
            let close = xml.matches(&format!("</{tag}>")).count();
            assert_eq!(open, 1, "open {tag}");
            assert_eq!(close, 1, "close {tag}");
        }
    }

    // Walks every tag with a stack; text between tags must be whitespace.
    fn assert_well_formed(xml: &str) {
        let decl = regex::Regex::new(r#"^<\?xml version="1\.0" encoding="utf-8"\?>"#).unwrap();
        let declaration = decl.find(xml).expect("missing xml declaration");
        let body = &xml[declaration.end()..];

        let tag = regex::Regex::new(
            r#"<(/?)([A-Za-z_][\w:.-]*)((?:\s+[A-Za-z_][\w:.-]*="[^"<>]*")*)\s*(/?)>"#,
        ).unwrap();

        let mut stack: Vec<String> = Vec::new();
        let mut roots = 0;
        let mut cursor = 0;
        for caps in tag.captures_iter(body) {
            let whole = caps.get(0).unwrap();
            assert!(body[cursor..whole.start()].trim().is_empty(), "stray text before {}", whole.as_str());
            cursor = whole.end();

            let closing = !caps[1].is_empty();
            let self_closing = !caps[4].is_empty();
            let name = caps[2].to_string();
            assert!(!(closing && self_closing), "bad tag {}", whole.as_str());

            if closing {
                assert_eq!(stack.pop().as_deref(), Some(name.as_str()), "mismatched </{name}>");
            } else {
                if stack.is_empty() {
                    roots += 1;
                }
                if !self_closing {
                    stack.push(name);
                }
            }
        }

        assert!(body[cursor..].trim().is_empty(), "stray text after last tag");
        assert!(stack.is_empty(), "unclosed {:?}", stack);
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_document_is_well_formed() {
        assert_well_formed(EdmDocument::transactions());
    }

    #[test]
    #[should_panic]
    fn test_well_formed_check_rejects_broken_attribute() {
        let broken = EdmDocument::transactions().replacen(r#"Type="Edm.Int32""#, r#"Type="Edm.Int32"#, 1);
        assert_well_formed(&broken);
    }

    #[test]
    #[should_panic]
    fn test_well_formed_check_rejects_unbalanced_tags() {
        let broken = EdmDocument::transactions().replacen("</Key>", "", 1);
        assert_well_formed(&broken);
    }

    #[test]
    fn test_render_is_stable() {
        assert_eq!(EdmDocument::render(SchemaDict::transactions()), EdmDocument::transactions());
    }
}
