//! Platform identity headers used by the service for quota attribution

use serde::{Deserialize, Serialize};

pub const IOS_BUNDLE_HEADER: &str = "X-Ios-Bundle-Identifier";
pub const ANDROID_PACKAGE_HEADER: &str = "X-Android-Package";
pub const ANDROID_CERT_HEADER: &str = "X-Android-Cert";

/// Identity of the calling application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum AppIdentity {
    /// No identity available; requests go out without identity headers
    #[default]
    Unknown,
    Ios {
        bundle_id: String,
    },
    Android {
        package: String,
        /// SHA-1 fingerprint of the signing certificate
        cert: String,
    },
}

impl AppIdentity {
    /// Resolve the identity through a variable lookup.
    ///
    /// `TRANSLATE_IOS_BUNDLE_ID` takes precedence; Android needs both
    /// `TRANSLATE_ANDROID_PACKAGE` and `TRANSLATE_ANDROID_CERT`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(bundle_id) = non_blank("TRANSLATE_IOS_BUNDLE_ID") {
            return AppIdentity::Ios { bundle_id };
        }

        match (
            non_blank("TRANSLATE_ANDROID_PACKAGE"),
            non_blank("TRANSLATE_ANDROID_CERT"),
        ) {
            (Some(package), Some(cert)) => AppIdentity::Android { package, cert },
            _ => AppIdentity::Unknown,
        }
    }

    /// Header set for this identity. Blank values yield no headers.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            AppIdentity::Ios { bundle_id } if !bundle_id.trim().is_empty() => {
                vec![(IOS_BUNDLE_HEADER, bundle_id.clone())]
            }
            AppIdentity::Android { package, cert }
                if !package.trim().is_empty() && !cert.trim().is_empty() =>
            {
                vec![
                    (ANDROID_PACKAGE_HEADER, package.clone()),
                    (ANDROID_CERT_HEADER, cert.clone()),
                ]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_unknown_has_no_headers() {
        assert!(AppIdentity::Unknown.headers().is_empty());
        assert_eq!(AppIdentity::from_lookup(lookup(&[])), AppIdentity::Unknown);
    }

    #[test]
    fn test_ios_headers() {
        let identity = AppIdentity::from_lookup(lookup(&[
            ("TRANSLATE_IOS_BUNDLE_ID", "com.example.app"),
            ("TRANSLATE_ANDROID_PACKAGE", "com.example.android"),
        ]));

        assert_eq!(
            identity.headers(),
            vec![(IOS_BUNDLE_HEADER, "com.example.app".to_string())]
        );
    }

    #[test]
    fn test_android_requires_package_and_cert() {
        let partial = AppIdentity::from_lookup(lookup(&[(
            "TRANSLATE_ANDROID_PACKAGE",
            "com.example.android",
        )]));
        assert_eq!(partial, AppIdentity::Unknown);

        let full = AppIdentity::from_lookup(lookup(&[
            ("TRANSLATE_ANDROID_PACKAGE", "com.example.android"),
            ("TRANSLATE_ANDROID_CERT", "AB:CD"),
        ]));
        assert_eq!(full.headers().len(), 2);
        assert_eq!(full.headers()[1], (ANDROID_CERT_HEADER, "AB:CD".to_string()));
    }

    #[test]
    fn test_blank_identity_yields_no_headers() {
        let identity = AppIdentity::Ios {
            bundle_id: "  ".to_string(),
        };
        assert!(identity.headers().is_empty());
    }
}
