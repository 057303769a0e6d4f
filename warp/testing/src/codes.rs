use {
    crate::mocks::{mock_receiver, native_rejecter},
    warp_app::{App, ContractBuilder},
};

/// Code indexes of every contract uploaded to a test app.
#[derive(Debug, Clone, Copy)]
pub struct Codes {
    pub portal: u32,
    pub token: u32,
    pub wrapped_native: u32,
    pub erc20_bridge: u32,
    pub wrapped_cat: u32,
    pub mock_receiver: u32,
    pub native_rejecter: u32,
}

pub fn upload_codes(app: &mut App) -> Codes {
    let portal = ContractBuilder::new(warp_portal::instantiate)
        .with_execute(warp_portal::execute)
        .with_receive(warp_portal::receive)
        .with_query(warp_portal::query)
        .build();

    let token = ContractBuilder::new(warp_token::instantiate)
        .with_execute(warp_token::execute)
        .with_query(warp_token::query)
        .build();

    let wrapped_native = ContractBuilder::new(warp_wrapped_native::instantiate)
        .with_execute(warp_wrapped_native::execute)
        .with_receive(warp_wrapped_native::receive)
        .with_query(warp_wrapped_native::query)
        .build();

    let erc20_bridge = ContractBuilder::new(warp_erc20_bridge::instantiate)
        .with_execute(warp_erc20_bridge::execute)
        .with_receive(warp_erc20_bridge::receive)
        .with_query(warp_erc20_bridge::query)
        .build();

    let wrapped_cat = ContractBuilder::new(warp_wrapped_cat::instantiate)
        .with_execute(warp_wrapped_cat::execute)
        .with_query(warp_wrapped_cat::query)
        .build();

    let mock_receiver = ContractBuilder::new(mock_receiver::instantiate)
        .with_execute(mock_receiver::execute)
        .with_query(mock_receiver::query)
        .build();

    let native_rejecter = ContractBuilder::new(native_rejecter::instantiate)
        .with_execute(native_rejecter::execute)
        .build();

    Codes {
        portal: app.upload(portal),
        token: app.upload(token),
        wrapped_native: app.upload(wrapped_native),
        erc20_bridge: app.upload(erc20_bridge),
        wrapped_cat: app.upload(wrapped_cat),
        mock_receiver: app.upload(mock_receiver),
        native_rejecter: app.upload(native_rejecter),
    }
}
