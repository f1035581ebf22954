//! Certificate inspection messages.

use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    GetCertRequest::SHAPE,
    GetCertResponse::SHAPE,
    VerifyCertKeyRequest::SHAPE,
    VerifyCertKeyResponse::SHAPE,
];

wire_enum! {
    ///
    /// CertType
    ///
    /// Which certificate store a query targets.
    ///
    pub enum CertType as "certificate type" {
        All = "all",
        Ldap = "ldap",
        Mailboxd = "mailboxd",
        Mta = "mta",
        Proxy = "proxy",
        Staged = "staged",
    }
}

///
/// SubjectAltName
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubjectAltName {
    pub value: String,
}

impl SubjectAltName {
    const VALUE: FieldDescriptor = FieldDescriptor::required("value", Binding::Text, FieldKind::Text);

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl MessageKind for SubjectAltName {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "subjectAltName",
        role: MessageRole::Child,
        fields: &[Self::VALUE],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::VALUE, Some(&self.value))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            value: r.req_str(Self::VALUE)?,
        })
    }
}

impl DebugFields for SubjectAltName {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("value", &self.value);
    }
}

///
/// CertInfo
///
/// One deployed certificate. The parsed X.509 fields ride as text-bearing
/// child elements; whichever the server omits stay `None`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CertInfo {
    pub server: String,
    pub cert_type: String,
    pub subject: Option<String>,
    pub issuer: Option<String>,
    pub not_before: Option<String>,
    pub not_after: Option<String>,
    pub subject_alt_names: Vec<SubjectAltName>,
}

impl CertInfo {
    const SERVER: FieldDescriptor = FieldDescriptor::required("server", Binding::Attr, FieldKind::Text);
    const TYPE: FieldDescriptor = FieldDescriptor::required("type", Binding::Attr, FieldKind::Text);
    const SUBJECT: FieldDescriptor =
        FieldDescriptor::optional("subject", Binding::Child, FieldKind::Text);
    const ISSUER: FieldDescriptor =
        FieldDescriptor::optional("issuer", Binding::Child, FieldKind::Text);
    const NOT_BEFORE: FieldDescriptor =
        FieldDescriptor::optional("notBefore", Binding::Child, FieldKind::Text);
    const NOT_AFTER: FieldDescriptor =
        FieldDescriptor::optional("notAfter", Binding::Child, FieldKind::Text);
    const ALT_NAMES: FieldDescriptor = FieldDescriptor::optional(
        "subjectAltName",
        Binding::Child,
        FieldKind::List(ListKind {
            item: SubjectAltName::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn new(server: impl Into<String>, cert_type: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            cert_type: cert_type.into(),
            ..Self::default()
        }
    }
}

impl MessageKind for CertInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "cert",
        role: MessageRole::Child,
        fields: &[
            Self::SERVER,
            Self::TYPE,
            Self::SUBJECT,
            Self::ISSUER,
            Self::NOT_BEFORE,
            Self::NOT_AFTER,
            Self::ALT_NAMES,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::SERVER, Some(&self.server))?;
        w.str_field(Self::TYPE, Some(&self.cert_type))?;
        w.str_field(Self::SUBJECT, self.subject.as_deref())?;
        w.str_field(Self::ISSUER, self.issuer.as_deref())?;
        w.str_field(Self::NOT_BEFORE, self.not_before.as_deref())?;
        w.str_field(Self::NOT_AFTER, self.not_after.as_deref())?;
        w.list(Self::ALT_NAMES, &self.subject_alt_names)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            server: r.req_str(Self::SERVER)?,
            cert_type: r.req_str(Self::TYPE)?,
            subject: r.opt_str(Self::SUBJECT),
            issuer: r.opt_str(Self::ISSUER),
            not_before: r.opt_str(Self::NOT_BEFORE),
            not_after: r.opt_str(Self::NOT_AFTER),
            subject_alt_names: r.list(Self::ALT_NAMES)?,
        })
    }
}

impl DebugFields for CertInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("server", &self.server);
        f.str_field("type", &self.cert_type);
        f.opt_str("subject", self.subject.as_deref());
        f.opt_str("issuer", self.issuer.as_deref());
        f.opt_str("notBefore", self.not_before.as_deref());
        f.opt_str("notAfter", self.not_after.as_deref());
        f.list("subjectAltName", &self.subject_alt_names);
    }
}

///
/// GetCertRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetCertRequest {
    pub server: String,
    pub cert_type: CertType,
}

impl GetCertRequest {
    const SERVER: FieldDescriptor = FieldDescriptor::required("server", Binding::Attr, FieldKind::Text);
    const TYPE: FieldDescriptor = FieldDescriptor::required(
        "type",
        Binding::Attr,
        FieldKind::Enum(<CertType as WireEnum>::TOKENS),
    );

    #[must_use]
    pub fn new(server: impl Into<String>, cert_type: CertType) -> Self {
        Self {
            server: server.into(),
            cert_type,
        }
    }
}

impl MessageKind for GetCertRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetCertRequest",
        role: MessageRole::Request,
        fields: &[Self::SERVER, Self::TYPE],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::SERVER, Some(&self.server))?;
        w.enum_field(Self::TYPE, Some(self.cert_type))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            server: r.req_str(Self::SERVER)?,
            cert_type: r.req_enum(Self::TYPE)?,
        })
    }
}

impl DebugFields for GetCertRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("server", &self.server);
        f.enum_field("type", self.cert_type);
    }
}

list_response! {
    ///
    /// GetCertResponse
    ///
    GetCertResponse { certs: [CertInfo] as "cert" }
}

impl AdminRequest for GetCertRequest {
    type Response = GetCertResponse;
}

///
/// VerifyCertKeyRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerifyCertKeyRequest {
    pub cert: String,
    pub privkey: String,
}

impl VerifyCertKeyRequest {
    const CERT: FieldDescriptor = FieldDescriptor::required("cert", Binding::Attr, FieldKind::Text);
    const PRIVKEY: FieldDescriptor =
        FieldDescriptor::required("privkey", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(cert: impl Into<String>, privkey: impl Into<String>) -> Self {
        Self {
            cert: cert.into(),
            privkey: privkey.into(),
        }
    }
}

impl MessageKind for VerifyCertKeyRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "VerifyCertKeyRequest",
        role: MessageRole::Request,
        fields: &[Self::CERT, Self::PRIVKEY],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::CERT, Some(&self.cert))?;
        w.str_field(Self::PRIVKEY, Some(&self.privkey))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            cert: r.req_str(Self::CERT)?,
            privkey: r.req_str(Self::PRIVKEY)?,
        })
    }
}

impl DebugFields for VerifyCertKeyRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("cert", &self.cert);
        // key material stays out of rendered output
        f.opt_str("privkey", (!self.privkey.is_empty()).then_some("***"));
    }
}

///
/// VerifyCertKeyResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerifyCertKeyResponse {
    pub verify_result: String,
}

impl VerifyCertKeyResponse {
    const VERIFY_RESULT: FieldDescriptor =
        FieldDescriptor::required("verifyResult", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(verify_result: impl Into<String>) -> Self {
        Self {
            verify_result: verify_result.into(),
        }
    }
}

impl MessageKind for VerifyCertKeyResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "VerifyCertKeyResponse",
        role: MessageRole::Response,
        fields: &[Self::VERIFY_RESULT],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::VERIFY_RESULT, Some(&self.verify_result))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            verify_result: r.req_str(Self::VERIFY_RESULT)?,
        })
    }
}

impl DebugFields for VerifyCertKeyResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("verifyResult", &self.verify_result);
    }
}

impl AdminRequest for VerifyCertKeyRequest {
    type Response = VerifyCertKeyResponse;
}

///
/// TESTS
///
