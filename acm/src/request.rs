/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Behavior shared by every ACM request and its builder.

use aws_types::request_config::Builder as OverrideConfigurationBuilder;
use aws_types::RequestOverrideConfiguration;
use smithy_schema::SdkPojo;

/// A request sent to ACM.
///
/// Every request may carry a [`RequestOverrideConfiguration`] that adjusts how this one call
/// is made. It takes part in equality and hashing but is never part of the field registry.
pub trait AcmRequest: SdkPojo {
    /// The override configuration of this request, if one was set.
    fn override_configuration(&self) -> Option<&RequestOverrideConfiguration>;
}

/// A builder of an [`AcmRequest`].
///
/// Every method returns the concrete builder, so shared setters can be chained with
/// operation specific ones:
///
/// ```
/// use acm::operation::describe_certificate::DescribeCertificateRequest;
/// use acm::request::{AcmRequest, AcmRequestBuilder};
///
/// let request = DescribeCertificateRequest::builder()
///     .override_configuration_with(|c| c.put_header("x-trace", "1"))
///     .certificate_arn("arn:aws:acm:us-east-1:123456789012:certificate/abc")
///     .build();
/// assert!(request.override_configuration().is_some());
/// ```
pub trait AcmRequestBuilder: Sized {
    /// Replaces the override configuration.
    fn set_override_configuration(self, input: Option<RequestOverrideConfiguration>) -> Self;

    /// The override configuration currently held by this builder.
    fn get_override_configuration(&self) -> &Option<RequestOverrideConfiguration>;

    /// Sets the override configuration.
    fn override_configuration(self, input: RequestOverrideConfiguration) -> Self {
        self.set_override_configuration(Some(input))
    }

    /// Edits the override configuration in place.
    ///
    /// `f` receives a builder seeded with the current configuration, or an empty one when
    /// none was set yet.
    fn override_configuration_with(
        self,
        f: impl FnOnce(OverrideConfigurationBuilder) -> OverrideConfigurationBuilder,
    ) -> Self {
        let seed = self
            .get_override_configuration()
            .as_ref()
            .map(RequestOverrideConfiguration::to_builder)
            .unwrap_or_default();
        self.set_override_configuration(Some(f(seed).build()))
    }
}

#[cfg(test)]
mod test {
    use super::{AcmRequest, AcmRequestBuilder};
    use crate::operation::list_certificates::ListCertificatesRequest;
    use aws_types::RequestOverrideConfiguration;
    use std::time::Duration;

    #[test]
    fn override_configuration_with_keeps_existing_values() {
        let request = ListCertificatesRequest::builder()
            .override_configuration(
                RequestOverrideConfiguration::builder()
                    .api_call_timeout(Duration::from_secs(5))
                    .build(),
            )
            .override_configuration_with(|c| c.put_header("x-a", "1"))
            .max_items(10)
            .build();
        let config = request.override_configuration().expect("set");
        assert_eq!(config.api_call_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.headers().get("x-a"), Some(&vec!["1".to_string()]));
    }

    #[test]
    fn override_configuration_takes_part_in_equality() {
        let plain = ListCertificatesRequest::builder().max_items(10).build();
        let with_config = plain
            .to_builder()
            .override_configuration_with(|c| c.put_header("x-a", "1"))
            .build();
        assert_ne!(plain, with_config);
        assert_eq!(with_config.max_items(), Some(10));
        assert_eq!(
            with_config,
            with_config.to_builder().build(),
        );
    }
}
