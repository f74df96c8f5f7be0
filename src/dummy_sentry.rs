// stands in for sentry_actix::Sentry when built without error_reporting,
// forwarding every request untouched

use std::future::{ready, Ready};
use std::task::{Context, Poll};

use actix_service::{Service, Transform};

pub struct Sentry;

impl Sentry {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, Req> Transform<S, Req> for Sentry
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Transform = PassThrough<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PassThrough { service }))
    }
}

pub struct PassThrough<S> {
    service: S,
}

impl<S, Req> Service<Req> for PassThrough<S>
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, rq: Req) -> Self::Future {
        self.service.call(rq)
    }
}
