// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Expected 256-bit derivations, hex encoded

use crate::{InfoSize, PasswordSize, SaltSize};

/// An absent info derives exactly like an empty one.
pub(crate) fn lookup(password: PasswordSize, salt: SaltSize, hash: &str, info: InfoSize) -> Option<&'static str> {
    let with_info = matches!(info, InfoSize::Normal);

    let hex = match (password, salt, hash, with_info) {
        // short password, normal salt
        (PasswordSize::Short, SaltSize::Normal, "SHA-1", true) => "9d2fe53f9c519012b2dc6e5d499c54270755a2be66a97be56c21ecb68dd14fd4",
        (PasswordSize::Short, SaltSize::Normal, "SHA-1", false) => "f5c7f94e93633f80800c1c8962442ee455c414087a5e58f095fb77d6e317baf4",
        (PasswordSize::Short, SaltSize::Normal, "SHA-256", true) => "252b8da42ea94509cd13c26e3da797342c624840eab11e7832c45d57573ff422",
        (PasswordSize::Short, SaltSize::Normal, "SHA-256", false) => "4aba5b578d0f9ecb6ea6dcd7816c2962018ff360c5ac0c2891c3d784d2515ad7",
        (PasswordSize::Short, SaltSize::Normal, "SHA-384", true) => "fe2d47897e3b4ef0c8c6f8b02fd48549e734adda9e890702e0eb6da72cb20c1c",
        (PasswordSize::Short, SaltSize::Normal, "SHA-384", false) => "8ae60813505d02afbca5ec440d8079af990bb13b4466af5463b896ba78b3ac86",
        (PasswordSize::Short, SaltSize::Normal, "SHA-512", true) => "80644876d0be456fa8eeb649b551c80056045ac4184de4a816582f5bba504435",
        (PasswordSize::Short, SaltSize::Normal, "SHA-512", false) => "38147c1342a28d65e2dde5f195acb160de40232ea84f76d58113ad994541a2a8",
        // short password, empty salt
        (PasswordSize::Short, SaltSize::Empty, "SHA-1", true) => "ba6d59e9ce488cee3ded6c654eb6da9cfffed690bc9ea32f44ae9e635e1cd0f3",
        (PasswordSize::Short, SaltSize::Empty, "SHA-1", false) => "05a4a61f68c122ba9c04de10779cead6b1e7399f8cf06e595d48adbe7af35073",
        (PasswordSize::Short, SaltSize::Empty, "SHA-256", true) => "3b83a06df76f9eff08ab6a0ad23f70f8ec90c4c0b130a424a623131bcd6a0126",
        (PasswordSize::Short, SaltSize::Empty, "SHA-256", false) => "e6f453861fc113d97538bbec1f420cdc1eb901fff35a359558c2189b0bbb17f6",
        (PasswordSize::Short, SaltSize::Empty, "SHA-384", true) => "1905c910b87fae9294ee633afeb31de917d456f6619c16b5677dea84388d064f",
        (PasswordSize::Short, SaltSize::Empty, "SHA-384", false) => "70c4710b5642a0c5a36ac21685e02904c1cf35b2f96a086896d7012653827b40",
        (PasswordSize::Short, SaltSize::Empty, "SHA-512", true) => "61082fb4182fcc4b544bef7f6b0e7132f7c74cdad76b0437a4d32f0be397b61e",
        (PasswordSize::Short, SaltSize::Empty, "SHA-512", false) => "b78ebf8cbf4621845bb9b0531c3915d155db5e248fae917ddb27d6964a6cadad",
        // long password, normal salt
        (PasswordSize::Long, SaltSize::Normal, "SHA-1", true) => "a7f7d4d225b27b444f408ce8625ef369efb888252c9067be821d6a50127b54eb",
        (PasswordSize::Long, SaltSize::Normal, "SHA-1", false) => "6cf948d73f0049eeaf77d8e82df676db32bfeab729bfcdea2cff606a8a121a40",
        (PasswordSize::Long, SaltSize::Normal, "SHA-256", true) => "c889adb5b2d4225914bd45e43cb8d5d1b2bd2512f9e318ec0d44a95d8f28c09d",
        (PasswordSize::Long, SaltSize::Normal, "SHA-256", false) => "e44c2335b79db039b23b5c253b45e622120fe5f1444c15accb9714a7bae69241",
        (PasswordSize::Long, SaltSize::Normal, "SHA-384", true) => "b86b6bcec20047fe4e1358a372de452ea3546187c25b9de30944f7cbefc70dc7",
        (PasswordSize::Long, SaltSize::Normal, "SHA-384", false) => "33de5ddb541f21575bdb8c5f5fa28ab9ffd4d4470e429dfc4a917f7779461114",
        (PasswordSize::Long, SaltSize::Normal, "SHA-512", true) => "aa909c10873fcba9c902fe3356b8b22abdd71952e59d5606c97ef929c10d58ed",
        (PasswordSize::Long, SaltSize::Normal, "SHA-512", false) => "32bce187bb71267fddbbbfa3476ea3c162f1a717a9c8b1f8a70ba5e7dd93e65a",
        // long password, empty salt
        (PasswordSize::Long, SaltSize::Empty, "SHA-1", true) => "bc503d591ddc7c24cf4545687d9fe1c8aa1745ba239ae8510287c0378681bcf2",
        (PasswordSize::Long, SaltSize::Empty, "SHA-1", false) => "6aba8fe3bc8b2ae61778f77805c22aceee9dfdf731366e22e88ac95790a2801a",
        (PasswordSize::Long, SaltSize::Empty, "SHA-256", true) => "4ec3f728d633ca5779b4cd11268715a67e3fc06a2728c530ed5e82040cce173b",
        (PasswordSize::Long, SaltSize::Empty, "SHA-256", false) => "549c5c703972059ea6fdff15c34ebbcc4a8e45917c78c17f1bb365c2465147bb",
        (PasswordSize::Long, SaltSize::Empty, "SHA-384", true) => "6badabdce5d43ad5f6a1a7c2b6b142ea37f61e3cc983c054fc810455ce21fa24",
        (PasswordSize::Long, SaltSize::Empty, "SHA-384", false) => "8e69b02056cc013686697507eff0191b2c88bd8a86fd466df60aefebb2686bd7",
        (PasswordSize::Long, SaltSize::Empty, "SHA-512", true) => "420731aa9cf64674a3ef42e443159c9d875b8daf7325b677c1a67f85d3c22cd4",
        (PasswordSize::Long, SaltSize::Empty, "SHA-512", false) => "8f5a2979fe164d3a017202326c6197aea258563d909b0120121c37226cb3d368",
        // empty password, normal salt
        (PasswordSize::Empty, SaltSize::Normal, "SHA-1", true) => "403dc2796bc91e2c1f70377e8bc9f413dc4c6517885f6fe4f75a8b7bc8d7ed94",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-1", false) => "b58f29621f4d65bfbca64db40ec0faba4f81332d02db2fbacd5e1eb66515adb6",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-256", true) => "41d1c9d9b443c01ab0ac755f0de1eda82b680ffc6e1ac5444a46a515d4a36f79",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-256", false) => "c558d8c640d55463b20447367d77ca7ee051c34a5e83f39b6a60e5b21ac61779",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-384", true) => "f349f1d90fc2d4cfce8045e8695821cb27a4cf50c858eaaba99ac0f1479c0629",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-384", false) => "c61b4147b937e382303dad4edf4fa6403cc8c1e68c82e11280cb043184d56686",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-512", true) => "e081333f2b3439d2247f8856e2d8fbc96ffacff629c7de98ae84ef20531f4599",
        (PasswordSize::Empty, SaltSize::Normal, "SHA-512", false) => "875f943f62096d496e25336022fb464d88e9e86a230310976ce43ca10fb0e722",
        // empty password, empty salt
        (PasswordSize::Empty, SaltSize::Empty, "SHA-1", true) => "fdf018053a5733d481d9dbf07f8e5f81882615d0728e9a17ef1d2e6b3746432c",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-1", false) => "885fc029b3224b896e09e0bbe5eb347ec59e6827c8e857b394f54ff49b88a8f6",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-256", true) => "8f0704b7468b8dbdf3e7650647a7d16fa9bf1c181753a279bd82ff9860d004bb",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-256", false) => "eb70f01dede9afafa449eee1b1286504e1f62388b3f7dd4f956697b0e828fe18",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-384", true) => "bea6653798be7cd6b5ac99001ddd6055c3e67162184fe9f47a905a737fe95c18",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-384", false) => "470cc65387ca4a10c7a68a3b5148c8e513daa63101000739c4c6659b86118884",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-512", true) => "3ce821fdac7f300d5f9a7af648885c6e37e08824d7130584d08d10bdff06a658",
        (PasswordSize::Empty, SaltSize::Empty, "SHA-512", false) => "9d73c98e791e80ebe5b4cb45693aa32fdd44b5fa3edab3ec82f9d0f4d66905e2",
        _ => return None,
    };

    Some(hex)
}
