//! RDF Vocabulary Constants for the Ethos composite-claim checker
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! across the Ethos ecosystem: claim reification, proof attachment, and the
//! W3C namespaces that presentations are expressed in.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `cred` - W3C Verifiable Credentials vocabulary (https://www.w3.org/2018/credentials#)
//! - `sec` - W3C security vocabulary (https://w3id.org/security#)
//! - `claims` - Ethos claim-attribution vocabulary (https://www.dock.io/rdf2020#)

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:subject IRI (reification vocabulary)
    pub const SUBJECT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#subject";

    /// rdf:predicate IRI (reification vocabulary)
    pub const PREDICATE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#predicate";

    /// rdf:object IRI (reification vocabulary)
    pub const OBJECT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#object";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:JSON IRI
    pub const JSON: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON";

    /// rdf:PlainLiteral IRI
    pub const PLAIN_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// W3C Verifiable Credentials vocabulary constants
pub mod cred {
    /// cred:VerifiablePresentation class IRI
    pub const VERIFIABLE_PRESENTATION: &str =
        "https://www.w3.org/2018/credentials#VerifiablePresentation";

    /// cred:VerifiableCredential class IRI
    pub const VERIFIABLE_CREDENTIAL: &str =
        "https://www.w3.org/2018/credentials#VerifiableCredential";

    /// cred:verifiableCredential property IRI (presentation -> credential)
    pub const VERIFIABLE_CREDENTIAL_PROP: &str =
        "https://www.w3.org/2018/credentials#verifiableCredential";

    /// cred:issuer property IRI
    pub const ISSUER: &str = "https://www.w3.org/2018/credentials#issuer";

    /// cred:credentialSubject property IRI
    pub const CREDENTIAL_SUBJECT: &str =
        "https://www.w3.org/2018/credentials#credentialSubject";
}

/// W3C security vocabulary constants
pub mod sec {
    /// sec:proof property IRI (carries a credential's signature block)
    pub const PROOF: &str = "https://w3id.org/security#proof";
}

/// Ethos claim-attribution vocabulary constants
pub mod claims {
    /// Predicate linking an issuer to a reified claim it attests
    pub const CLAIMS_V1: &str = "https://www.dock.io/rdf2020#claimsV1";

    /// Property carrying a presentation's attached logic proof
    pub const LOGIC_V1: &str = "https://www.dock.io/rdf2020#logicV1";
}
