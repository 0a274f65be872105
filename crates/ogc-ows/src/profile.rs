// SPDX-License-Identifier: MIT OR Apache-2.0

/// Fixed document metadata for one protocol version.
///
/// A profile is defined once per protocol module as a `const` and injected
/// into a [`ReportBuilder`](crate::ReportBuilder). Nothing supplied at
/// render time can alter these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportProfile {
    service: &'static str,
    version: &'static str,
    namespace: &'static str,
    schema_instance: &'static str,
    schema_location: &'static str,
}

impl ReportProfile {
    /// Define a profile. `schema_location` is the usual `namespace URL` pair.
    pub const fn new(
        service: &'static str,
        version: &'static str,
        namespace: &'static str,
        schema_instance: &'static str,
        schema_location: &'static str,
    ) -> Self {
        Self {
            service,
            version,
            namespace,
            schema_instance,
            schema_location,
        }
    }

    /// Service identifier, e.g. `WMS`.
    pub const fn service(&self) -> &'static str {
        self.service
    }

    /// Protocol version string, e.g. `1.3.0`.
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Default XML namespace of the report document.
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// XML Schema instance namespace.
    pub const fn schema_instance(&self) -> &'static str {
        self.schema_instance
    }

    /// `xsi:schemaLocation` value.
    pub const fn schema_location(&self) -> &'static str {
        self.schema_location
    }
}
